/// Brand domain layer - entities, request DTOs and SQLite persistence
///
/// Projects are the root aggregate: colors, typography entries and member
/// grants all hang off a project and are cleaned up with it.

pub mod storage;
pub mod types;

pub use storage::BrandStorage;
pub use types::{
    BrandColor, BrandTypography, MemberWithUser, Project, ProjectMember, ProjectWithDetails,
    User, UserSummary,
};
