/// SQLite persistence layer for brand data
///
/// Handles CRUD for users, projects, colors, typography and membership rows,
/// plus the project aggregate loader. Columns are mapped by hand so the wire
/// types stay decoupled from the schema.

use crate::brand::types::{
    BrandColor, BrandTypography, InsertBrandColor, InsertBrandTypography, InsertProject,
    InsertProjectMember, MemberWithUser, Project, ProjectMember, ProjectWithDetails,
    UpdateBrandColor, UpdateBrandTypography, UpdateProject, User, UserSummary,
};
use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqliteRow},
    Row,
};
use std::path::Path;

/// SQLite-backed storage for all brand entities
///
/// Cheap to clone; all methods run against the shared connection pool.
#[derive(Debug, Clone)]
pub struct BrandStorage {
    pool: SqlitePool,
}

impl BrandStorage {
    /// Create a storage instance over an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database file at `path`
    ///
    /// Foreign keys are enabled on every connection so that deleting a
    /// project cascades to its colors, typography and membership rows.
    pub async fn open(path: &str) -> Result<Self> {
        if let Some(dir) = Path::new(path).parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create database directory '{}'", dir.display()))?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePool::connect_with(options).await?;

        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize the relational schema
    ///
    /// Safe to call multiple times (uses IF NOT EXISTS). Dependent rows carry
    /// ON DELETE CASCADE back to their project.
    pub async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                created_at TIMESTAMP NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS projects (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                tagline TEXT,
                category TEXT,
                description TEXT,
                logo_url TEXT,
                tone_of_voice TEXT,
                usage_guidelines TEXT,
                user_id INTEGER NOT NULL REFERENCES users(id),
                created_at TIMESTAMP NOT NULL,
                updated_at TIMESTAMP NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS brand_colors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
                name TEXT NOT NULL,
                hex_code TEXT NOT NULL,
                usage TEXT,
                sort_order INTEGER NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS brand_typography (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
                type TEXT NOT NULL,
                font_family TEXT NOT NULL,
                google_font_url TEXT,
                weights JSON NOT NULL DEFAULT '[]'
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS project_members (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
                user_id INTEGER NOT NULL REFERENCES users(id),
                role TEXT NOT NULL DEFAULT 'viewer',
                invited_at TIMESTAMP NOT NULL,
                UNIQUE(project_id, user_id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_projects_user ON projects(user_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_colors_project ON brand_colors(project_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_typography_project ON brand_typography(project_id)",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_members_project ON project_members(project_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // --- Users ---

    /// Create a user account; `password` must already be hashed
    pub async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        email: &str,
        name: &str,
    ) -> Result<User> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO users (username, password, email, name, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(username)
        .bind(password_hash)
        .bind(email)
        .bind(name)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get_user(result.last_insert_rowid())
            .await?
            .context("user row missing after insert")
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_user))
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_user))
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_user))
    }

    // --- Projects ---

    pub async fn create_project(&self, owner_id: i64, project: &InsertProject) -> Result<Project> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO projects
                (name, tagline, category, description, logo_url, tone_of_voice,
                 usage_guidelines, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&project.name)
        .bind(&project.tagline)
        .bind(&project.category)
        .bind(&project.description)
        .bind(&project.logo_url)
        .bind(&project.tone_of_voice)
        .bind(&project.usage_guidelines)
        .bind(owner_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.get_project(result.last_insert_rowid())
            .await?
            .context("project row missing after insert")
    }

    pub async fn get_project(&self, id: i64) -> Result<Option<Project>> {
        let row = sqlx::query("SELECT * FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_project))
    }

    /// Projects owned by `user_id`, most recently modified first
    pub async fn list_projects_by_user(&self, user_id: i64) -> Result<Vec<Project>> {
        let rows = sqlx::query("SELECT * FROM projects WHERE user_id = ? ORDER BY updated_at DESC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(map_project).collect())
    }

    /// Merge-patch a project; bumps `updated_at`. Returns None if absent.
    pub async fn update_project(&self, id: i64, patch: &UpdateProject) -> Result<Option<Project>> {
        let Some(existing) = self.get_project(id).await? else {
            return Ok(None);
        };

        let name = patch.name.clone().unwrap_or(existing.name);
        let tagline = patch.tagline.clone().or(existing.tagline);
        let category = patch.category.clone().or(existing.category);
        let description = patch.description.clone().or(existing.description);
        let logo_url = patch.logo_url.clone().or(existing.logo_url);
        let tone_of_voice = patch.tone_of_voice.clone().or(existing.tone_of_voice);
        let usage_guidelines = patch.usage_guidelines.clone().or(existing.usage_guidelines);
        let now = Utc::now();

        sqlx::query(
            r#"
            UPDATE projects SET
                name = ?, tagline = ?, category = ?, description = ?, logo_url = ?,
                tone_of_voice = ?, usage_guidelines = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&name)
        .bind(&tagline)
        .bind(&category)
        .bind(&description)
        .bind(&logo_url)
        .bind(&tone_of_voice)
        .bind(&usage_guidelines)
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.get_project(id).await
    }

    /// Delete a project; dependent rows are removed by cascade
    pub async fn delete_project(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- Brand colors ---

    /// Colors for a project in display order; ties broken by insertion
    pub async fn list_project_colors(&self, project_id: i64) -> Result<Vec<BrandColor>> {
        let rows = sqlx::query(
            "SELECT * FROM brand_colors WHERE project_id = ? ORDER BY sort_order ASC, id ASC",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(map_color).collect())
    }

    pub async fn get_brand_color(&self, id: i64) -> Result<Option<BrandColor>> {
        let row = sqlx::query("SELECT * FROM brand_colors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_color))
    }

    pub async fn create_brand_color(
        &self,
        project_id: i64,
        color: &InsertBrandColor,
    ) -> Result<BrandColor> {
        let result = sqlx::query(
            "INSERT INTO brand_colors (project_id, name, hex_code, usage, sort_order) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(project_id)
        .bind(&color.name)
        .bind(&color.hex_code)
        .bind(&color.usage)
        .bind(color.sort_order)
        .execute(&self.pool)
        .await?;

        self.get_brand_color(result.last_insert_rowid())
            .await?
            .context("color row missing after insert")
    }

    pub async fn update_brand_color(
        &self,
        id: i64,
        patch: &UpdateBrandColor,
    ) -> Result<Option<BrandColor>> {
        let Some(existing) = self.get_brand_color(id).await? else {
            return Ok(None);
        };

        let name = patch.name.clone().unwrap_or(existing.name);
        let hex_code = patch.hex_code.clone().unwrap_or(existing.hex_code);
        let usage = patch.usage.clone().or(existing.usage);
        let sort_order = patch.sort_order.unwrap_or(existing.sort_order);

        sqlx::query(
            "UPDATE brand_colors SET name = ?, hex_code = ?, usage = ?, sort_order = ? WHERE id = ?",
        )
        .bind(&name)
        .bind(&hex_code)
        .bind(&usage)
        .bind(sort_order)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.get_brand_color(id).await
    }

    pub async fn delete_brand_color(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM brand_colors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- Brand typography ---

    pub async fn list_project_typography(&self, project_id: i64) -> Result<Vec<BrandTypography>> {
        let rows = sqlx::query("SELECT * FROM brand_typography WHERE project_id = ?")
            .bind(project_id)
            .fetch_all(&self.pool)
            .await?;
        rows.into_iter().map(map_typography).collect()
    }

    pub async fn get_brand_typography(&self, id: i64) -> Result<Option<BrandTypography>> {
        let row = sqlx::query("SELECT * FROM brand_typography WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(map_typography).transpose()
    }

    pub async fn create_brand_typography(
        &self,
        project_id: i64,
        typography: &InsertBrandTypography,
    ) -> Result<BrandTypography> {
        let weights_json = serde_json::to_string(&typography.weights)?;
        let result = sqlx::query(
            "INSERT INTO brand_typography (project_id, type, font_family, google_font_url, weights) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(project_id)
        .bind(&typography.kind)
        .bind(&typography.font_family)
        .bind(&typography.google_font_url)
        .bind(&weights_json)
        .execute(&self.pool)
        .await?;

        self.get_brand_typography(result.last_insert_rowid())
            .await?
            .context("typography row missing after insert")
    }

    pub async fn update_brand_typography(
        &self,
        id: i64,
        patch: &UpdateBrandTypography,
    ) -> Result<Option<BrandTypography>> {
        let Some(existing) = self.get_brand_typography(id).await? else {
            return Ok(None);
        };

        let kind = patch.kind.clone().unwrap_or(existing.kind);
        let font_family = patch.font_family.clone().unwrap_or(existing.font_family);
        let google_font_url = patch.google_font_url.clone().or(existing.google_font_url);
        let weights = patch.weights.clone().unwrap_or(existing.weights);
        let weights_json = serde_json::to_string(&weights)?;

        sqlx::query(
            "UPDATE brand_typography SET type = ?, font_family = ?, google_font_url = ?, weights = ? WHERE id = ?",
        )
        .bind(&kind)
        .bind(&font_family)
        .bind(&google_font_url)
        .bind(&weights_json)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.get_brand_typography(id).await
    }

    pub async fn delete_brand_typography(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM brand_typography WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- Project members ---

    /// Membership rows joined with each member's public identity
    pub async fn list_project_members(&self, project_id: i64) -> Result<Vec<MemberWithUser>> {
        let rows = sqlx::query(
            r#"
            SELECT m.id, m.project_id, m.user_id, m.role, m.invited_at,
                   u.name AS user_name, u.username AS user_username
            FROM project_members m
            INNER JOIN users u ON u.id = m.user_id
            WHERE m.project_id = ?
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        let mut members = Vec::with_capacity(rows.len());
        for row in rows {
            let user_id: i64 = row.get("user_id");
            members.push(MemberWithUser {
                member: ProjectMember {
                    id: row.get("id"),
                    project_id: row.get("project_id"),
                    user_id,
                    role: row.get("role"),
                    invited_at: row.get("invited_at"),
                },
                user: UserSummary {
                    id: user_id,
                    name: row.get("user_name"),
                    username: row.get("user_username"),
                },
            });
        }
        Ok(members)
    }

    pub async fn get_project_member(
        &self,
        project_id: i64,
        user_id: i64,
    ) -> Result<Option<ProjectMember>> {
        let row = sqlx::query("SELECT * FROM project_members WHERE project_id = ? AND user_id = ?")
            .bind(project_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(map_member))
    }

    pub async fn add_project_member(
        &self,
        project_id: i64,
        member: &InsertProjectMember,
    ) -> Result<ProjectMember> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO project_members (project_id, user_id, role, invited_at) VALUES (?, ?, ?, ?)",
        )
        .bind(project_id)
        .bind(member.user_id)
        .bind(&member.role)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query("SELECT * FROM project_members WHERE id = ?")
            .bind(result.last_insert_rowid())
            .fetch_optional(&self.pool)
            .await?;
        row.map(map_member).context("member row missing after insert")
    }

    pub async fn update_project_member_role(
        &self,
        project_id: i64,
        user_id: i64,
        role: &str,
    ) -> Result<Option<ProjectMember>> {
        let result =
            sqlx::query("UPDATE project_members SET role = ? WHERE project_id = ? AND user_id = ?")
                .bind(role)
                .bind(project_id)
                .bind(user_id)
                .execute(&self.pool)
                .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.get_project_member(project_id, user_id).await
    }

    pub async fn remove_project_member(&self, project_id: i64, user_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM project_members WHERE project_id = ? AND user_id = ?")
            .bind(project_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // --- Aggregate loader ---

    /// Assemble a project with its colors, typography, members and owner
    ///
    /// The four sub-fetches are issued concurrently as a latency optimization;
    /// they are not wrapped in one snapshot, so a write landing between them
    /// can mix generations. Acceptable at this write concurrency.
    ///
    /// A missing owner row (data-integrity anomaly) degrades to an owner
    /// record with the correct id and empty name/username instead of failing
    /// the whole read.
    pub async fn get_project_with_details(&self, id: i64) -> Result<Option<ProjectWithDetails>> {
        let Some(project) = self.get_project(id).await? else {
            return Ok(None);
        };

        let (colors, typography, members, owner) = tokio::join!(
            self.list_project_colors(id),
            self.list_project_typography(id),
            self.list_project_members(id),
            self.get_user(project.user_id),
        );

        let owner = match owner? {
            Some(user) => user.summary(),
            None => {
                tracing::warn!("Project {} references missing owner user {}", id, project.user_id);
                UserSummary {
                    id: project.user_id,
                    name: String::new(),
                    username: String::new(),
                }
            }
        };

        Ok(Some(ProjectWithDetails {
            project,
            colors: colors?,
            typography: typography?,
            members: members?,
            owner,
        }))
    }
}

// --- Row mapping ---

fn map_user(row: SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        email: row.get("email"),
        name: row.get("name"),
        password: row.get("password"),
        created_at: row.get("created_at"),
    }
}

fn map_project(row: SqliteRow) -> Project {
    Project {
        id: row.get("id"),
        name: row.get("name"),
        tagline: row.get("tagline"),
        category: row.get("category"),
        description: row.get("description"),
        logo_url: row.get("logo_url"),
        tone_of_voice: row.get("tone_of_voice"),
        usage_guidelines: row.get("usage_guidelines"),
        user_id: row.get("user_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

fn map_color(row: SqliteRow) -> BrandColor {
    BrandColor {
        id: row.get("id"),
        project_id: row.get("project_id"),
        name: row.get("name"),
        hex_code: row.get("hex_code"),
        usage: row.get("usage"),
        sort_order: row.get("sort_order"),
    }
}

fn map_typography(row: SqliteRow) -> Result<BrandTypography> {
    let weights_json: String = row.get("weights");
    let weights: Vec<String> =
        serde_json::from_str(&weights_json).context("malformed weights JSON in brand_typography")?;
    Ok(BrandTypography {
        id: row.get("id"),
        project_id: row.get("project_id"),
        kind: row.get("type"),
        font_family: row.get("font_family"),
        google_font_url: row.get("google_font_url"),
        weights,
    })
}

fn map_member(row: SqliteRow) -> ProjectMember {
    ProjectMember {
        id: row.get("id"),
        project_id: row.get("project_id"),
        user_id: row.get("user_id"),
        role: row.get("role"),
        invited_at: row.get("invited_at"),
    }
}
