/// Project access policy
///
/// The single authorization gate consulted by every project-scoped route.
/// Two levels exist: ownership (required for all writes) and access
/// (ownership or any membership role, required for reads of a project's
/// detail and its dependent lists). Membership roles are stored but grant no
/// extra write rights.

use crate::api::error::ApiError;
use crate::brand::{storage::BrandStorage, types::Project};
use anyhow::Result;

/// Authorization decisions for project-scoped operations
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    storage: BrandStorage,
}

impl AccessPolicy {
    pub fn new(storage: BrandStorage) -> Self {
        Self { storage }
    }

    /// True iff `user_id` is the project's immutable owner
    pub fn is_owner(&self, user_id: i64, project: &Project) -> bool {
        project.user_id == user_id
    }

    /// True iff `user_id` is the owner or holds a membership row, any role
    pub async fn can_access(&self, user_id: i64, project: &Project) -> Result<bool> {
        if self.is_owner(user_id, project) {
            return Ok(true);
        }
        let member = self.storage.get_project_member(project.id, user_id).await?;
        Ok(member.is_some())
    }

    /// Gate for mutating operations: owner or 403
    pub fn require_owner(&self, user_id: i64, project: &Project) -> Result<(), ApiError> {
        if self.is_owner(user_id, project) {
            Ok(())
        } else {
            Err(ApiError::AccessDenied)
        }
    }

    /// Gate for project reads: owner or member, else 403
    pub async fn require_access(&self, user_id: i64, project: &Project) -> Result<(), ApiError> {
        if self.can_access(user_id, project).await? {
            Ok(())
        } else {
            Err(ApiError::AccessDenied)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::types::InsertProjectMember;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_storage() -> BrandStorage {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        let storage = BrandStorage::new(pool);
        storage.init_schema().await.expect("schema init");
        storage
    }

    async fn seed_user(storage: &BrandStorage, username: &str) -> i64 {
        storage
            .create_user(username, "x", &format!("{username}@example.com"), username)
            .await
            .expect("create user")
            .id
    }

    #[tokio::test]
    async fn owner_always_has_access() {
        let storage = test_storage().await;
        let owner = seed_user(&storage, "owner").await;
        let project = storage
            .create_project(
                owner,
                &crate::brand::types::InsertProject {
                    name: "Acme".to_string(),
                    tagline: None,
                    category: None,
                    description: None,
                    logo_url: None,
                    tone_of_voice: None,
                    usage_guidelines: None,
                },
            )
            .await
            .expect("create project");

        let policy = AccessPolicy::new(storage);
        assert!(policy.is_owner(owner, &project));
        assert!(policy.can_access(owner, &project).await.expect("query"));
    }

    #[tokio::test]
    async fn member_has_access_but_not_ownership() {
        let storage = test_storage().await;
        let owner = seed_user(&storage, "owner").await;
        let viewer = seed_user(&storage, "viewer").await;
        let admin = seed_user(&storage, "admin").await;
        let stranger = seed_user(&storage, "stranger").await;
        let project = storage
            .create_project(
                owner,
                &crate::brand::types::InsertProject {
                    name: "Acme".to_string(),
                    tagline: None,
                    category: None,
                    description: None,
                    logo_url: None,
                    tone_of_voice: None,
                    usage_guidelines: None,
                },
            )
            .await
            .expect("create project");

        storage
            .add_project_member(
                project.id,
                &InsertProjectMember { user_id: viewer, role: "viewer".to_string() },
            )
            .await
            .expect("add viewer");
        storage
            .add_project_member(
                project.id,
                &InsertProjectMember { user_id: admin, role: "admin".to_string() },
            )
            .await
            .expect("add admin");

        let policy = AccessPolicy::new(storage);
        // Access is role-independent for members
        assert!(policy.can_access(viewer, &project).await.expect("query"));
        assert!(policy.can_access(admin, &project).await.expect("query"));
        assert!(!policy.can_access(stranger, &project).await.expect("query"));
        // Even an admin member is not the owner
        assert!(!policy.is_owner(admin, &project));
        assert!(policy.require_owner(admin, &project).is_err());
        assert!(policy.require_owner(owner, &project).is_ok());
    }
}
