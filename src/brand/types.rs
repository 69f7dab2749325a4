/// Core brand domain type definitions
///
/// Entities mirror the relational schema; insert/update DTOs are validated
/// once at the HTTP boundary and reported with field-level errors. All wire
/// names are camelCase for compatibility with existing API consumers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user account
///
/// The `password` field holds the argon2 PHC hash and is never serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub name: String,
    /// Argon2 PHC hash, not the plaintext password
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// The reduced user identity embedded in project reads (id, name, username only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub username: String,
}

impl User {
    /// Identity projection safe to embed in shared responses
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
        }
    }
}

/// A brand identity record, owned by exactly one user
///
/// Ownership (`user_id`) is immutable: no operation transfers it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub tagline: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub tone_of_voice: Option<String>,
    pub usage_guidelines: Option<String>,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A palette entry belonging to a project
///
/// `sort_order` is the explicit display order; ties are broken by insertion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandColor {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub hex_code: String,
    pub usage: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i64,
}

/// A typography choice belonging to a project
///
/// `kind` is the role tag ("primary" or "secondary"); weights are free-form
/// labels like "400" or "bold".
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandTypography {
    pub id: i64,
    pub project_id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub font_family: String,
    pub google_font_url: Option<String>,
    pub weights: Vec<String>,
}

/// A membership grant giving a user access to a project
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    pub id: i64,
    pub project_id: i64,
    pub user_id: i64,
    pub role: String,
    pub invited_at: DateTime<Utc>,
}

/// A membership grant joined with the member's user identity
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWithUser {
    #[serde(flatten)]
    pub member: ProjectMember,
    pub user: UserSummary,
}

/// The full project read view: project row plus colors, typography,
/// members and the owner's identity, assembled by the aggregate loader
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectWithDetails {
    #[serde(flatten)]
    pub project: Project,
    pub colors: Vec<BrandColor>,
    pub typography: Vec<BrandTypography>,
    pub members: Vec<MemberWithUser>,
    pub owner: UserSummary,
}

/// Member roles accepted by the membership routes
pub const MEMBER_ROLES: [&str; 3] = ["admin", "contributor", "viewer"];

/// A single field-level validation failure
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn required(field: &'static str) -> Self {
        Self {
            field,
            message: "is required".to_string(),
        }
    }
}

fn check_required(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError::required(field));
    }
}

/// Accepts `#RGB` and `#RRGGBB`
fn is_valid_hex_code(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    (digits.len() == 3 || digits.len() == 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

fn check_hex_code(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if !is_valid_hex_code(value) {
        errors.push(FieldError {
            field,
            message: "must be a hex color like #1A2B3C".to_string(),
        });
    }
}

fn check_role(errors: &mut Vec<FieldError>, field: &'static str, value: &str) {
    if !MEMBER_ROLES.contains(&value) {
        errors.push(FieldError {
            field,
            message: format!("must be one of: {}", MEMBER_ROLES.join(", ")),
        });
    }
}

fn finish(errors: Vec<FieldError>) -> Result<(), Vec<FieldError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Registration request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: String,
}

impl InsertUser {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_required(&mut errors, "username", &self.username);
        check_required(&mut errors, "email", &self.email);
        check_required(&mut errors, "name", &self.name);
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            errors.push(FieldError {
                field: "email",
                message: "must be a valid email address".to_string(),
            });
        }
        if self.password.len() < 6 {
            errors.push(FieldError {
                field: "password",
                message: "must be at least 6 characters".to_string(),
            });
        }
        finish(errors)
    }
}

/// Login request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Project creation request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProject {
    pub name: String,
    pub tagline: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub tone_of_voice: Option<String>,
    pub usage_guidelines: Option<String>,
}

impl InsertProject {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_required(&mut errors, "name", &self.name);
        finish(errors)
    }
}

/// Partial project update request body; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub tone_of_voice: Option<String>,
    pub usage_guidelines: Option<String>,
}

impl UpdateProject {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            check_required(&mut errors, "name", name);
        }
        finish(errors)
    }
}

/// Color creation request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertBrandColor {
    pub name: String,
    pub hex_code: String,
    pub usage: Option<String>,
    #[serde(rename = "order", default)]
    pub sort_order: i64,
}

impl InsertBrandColor {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_required(&mut errors, "name", &self.name);
        check_required(&mut errors, "hexCode", &self.hex_code);
        if !self.hex_code.trim().is_empty() {
            check_hex_code(&mut errors, "hexCode", &self.hex_code);
        }
        finish(errors)
    }
}

/// Partial color update request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandColor {
    pub name: Option<String>,
    pub hex_code: Option<String>,
    pub usage: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i64>,
}

impl UpdateBrandColor {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(name) = &self.name {
            check_required(&mut errors, "name", name);
        }
        if let Some(hex) = &self.hex_code {
            check_hex_code(&mut errors, "hexCode", hex);
        }
        finish(errors)
    }
}

/// Typography creation request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertBrandTypography {
    #[serde(rename = "type")]
    pub kind: String,
    pub font_family: String,
    pub google_font_url: Option<String>,
    #[serde(default)]
    pub weights: Vec<String>,
}

impl InsertBrandTypography {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_required(&mut errors, "type", &self.kind);
        check_required(&mut errors, "fontFamily", &self.font_family);
        finish(errors)
    }
}

/// Partial typography update request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandTypography {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub font_family: Option<String>,
    pub google_font_url: Option<String>,
    pub weights: Option<Vec<String>>,
}

impl UpdateBrandTypography {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if let Some(kind) = &self.kind {
            check_required(&mut errors, "type", kind);
        }
        if let Some(family) = &self.font_family {
            check_required(&mut errors, "fontFamily", family);
        }
        finish(errors)
    }
}

/// Membership grant request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProjectMember {
    pub user_id: i64,
    #[serde(default = "default_member_role")]
    pub role: String,
}

fn default_member_role() -> String {
    "viewer".to_string()
}

impl InsertProjectMember {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_role(&mut errors, "role", &self.role);
        finish(errors)
    }
}

/// Member role change request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRole {
    pub role: String,
}

impl UpdateMemberRole {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        check_role(&mut errors, "role", &self.role);
        finish(errors)
    }
}
