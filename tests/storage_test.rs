//! Storage-layer tests over in-memory SQLite
//!
//! Covers the aggregate loader, cascade deletes and ordering guarantees that
//! are awkward to assert through the HTTP surface.

use brandkit::brand::types::{
    InsertBrandColor, InsertBrandTypography, InsertProject, InsertProjectMember,
};
use brandkit::{BrandStorage, User};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// In-memory storage with foreign keys enforced, as in production
async fn mem_storage() -> BrandStorage {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("options")
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory sqlite");
    let storage = BrandStorage::new(pool);
    storage.init_schema().await.expect("schema init");
    storage
}

/// In-memory storage without foreign-key enforcement, to plant anomalies
async fn mem_storage_unchecked() -> BrandStorage {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("options")
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("in-memory sqlite");
    let storage = BrandStorage::new(pool);
    storage.init_schema().await.expect("schema init");
    storage
}

async fn make_user(storage: &BrandStorage, username: &str) -> User {
    storage
        .create_user(
            username,
            "$argon2id$fake-hash",
            &format!("{username}@example.com"),
            username,
        )
        .await
        .expect("create user")
}

fn project_named(name: &str) -> InsertProject {
    InsertProject {
        name: name.to_string(),
        tagline: None,
        category: None,
        description: None,
        logo_url: None,
        tone_of_voice: None,
        usage_guidelines: None,
    }
}

fn color(name: &str, hex: &str, sort_order: i64) -> InsertBrandColor {
    InsertBrandColor {
        name: name.to_string(),
        hex_code: hex.to_string(),
        usage: None,
        sort_order,
    }
}

#[tokio::test]
async fn aggregate_of_bare_project_has_empty_lists() {
    let storage = mem_storage().await;
    let owner = make_user(&storage, "ada").await;
    let project = storage
        .create_project(owner.id, &project_named("Acme"))
        .await
        .expect("create project");

    let details = storage
        .get_project_with_details(project.id)
        .await
        .expect("load")
        .expect("present");

    assert!(details.colors.is_empty());
    assert!(details.typography.is_empty());
    assert!(details.members.is_empty());
    assert_eq!(details.owner.id, owner.id);
    assert_eq!(details.owner.username, "ada");
}

#[tokio::test]
async fn aggregate_of_missing_project_is_none() {
    let storage = mem_storage().await;
    assert!(storage
        .get_project_with_details(12345)
        .await
        .expect("load")
        .is_none());
}

#[tokio::test]
async fn missing_owner_degrades_to_blank_identity() {
    // Plant a project whose owner row does not exist
    let storage = mem_storage_unchecked().await;
    let project = storage
        .create_project(999, &project_named("Orphaned"))
        .await
        .expect("create project");

    let details = storage
        .get_project_with_details(project.id)
        .await
        .expect("load survives the anomaly")
        .expect("present");

    assert_eq!(details.owner.id, 999);
    assert_eq!(details.owner.name, "");
    assert_eq!(details.owner.username, "");
}

#[tokio::test]
async fn colors_order_ties_break_by_insertion() {
    let storage = mem_storage().await;
    let owner = make_user(&storage, "ada").await;
    let project = storage
        .create_project(owner.id, &project_named("Acme"))
        .await
        .expect("create project");

    for c in [
        color("Late", "#333333", 2),
        color("TiedFirst", "#111111", 1),
        color("TiedSecond", "#222222", 1),
    ] {
        storage
            .create_brand_color(project.id, &c)
            .await
            .expect("create color");
    }

    let colors = storage
        .list_project_colors(project.id)
        .await
        .expect("list");
    let names: Vec<&str> = colors.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["TiedFirst", "TiedSecond", "Late"]);
}

#[tokio::test]
async fn deleting_a_project_cascades_to_dependents() {
    let storage = mem_storage().await;
    let owner = make_user(&storage, "ada").await;
    let member = make_user(&storage, "bob").await;
    let project = storage
        .create_project(owner.id, &project_named("Acme"))
        .await
        .expect("create project");

    let c = storage
        .create_brand_color(project.id, &color("Red", "#FF0000", 0))
        .await
        .expect("create color");
    let t = storage
        .create_brand_typography(
            project.id,
            &InsertBrandTypography {
                kind: "primary".to_string(),
                font_family: "Inter".to_string(),
                google_font_url: None,
                weights: vec!["400".to_string()],
            },
        )
        .await
        .expect("create typography");
    storage
        .add_project_member(
            project.id,
            &InsertProjectMember {
                user_id: member.id,
                role: "viewer".to_string(),
            },
        )
        .await
        .expect("add member");

    assert!(storage.delete_project(project.id).await.expect("delete"));

    assert!(storage.get_brand_color(c.id).await.expect("get").is_none());
    assert!(storage
        .get_brand_typography(t.id)
        .await
        .expect("get")
        .is_none());
    assert!(storage
        .get_project_member(project.id, member.id)
        .await
        .expect("get")
        .is_none());
    // The member's account itself survives
    assert!(storage.get_user(member.id).await.expect("get").is_some());
}

#[tokio::test]
async fn duplicate_membership_is_rejected_by_the_schema() {
    let storage = mem_storage().await;
    let owner = make_user(&storage, "ada").await;
    let member = make_user(&storage, "bob").await;
    let project = storage
        .create_project(owner.id, &project_named("Acme"))
        .await
        .expect("create project");

    let grant = InsertProjectMember {
        user_id: member.id,
        role: "viewer".to_string(),
    };
    storage
        .add_project_member(project.id, &grant)
        .await
        .expect("first grant");
    assert!(storage.add_project_member(project.id, &grant).await.is_err());
}

#[tokio::test]
async fn project_listing_tracks_updated_at() {
    let storage = mem_storage().await;
    let owner = make_user(&storage, "ada").await;
    let first = storage
        .create_project(owner.id, &project_named("First"))
        .await
        .expect("create");
    let _second = storage
        .create_project(owner.id, &project_named("Second"))
        .await
        .expect("create");

    // Touching the older project moves it to the front
    storage
        .update_project(
            first.id,
            &brandkit::brand::types::UpdateProject {
                name: Some("First, renamed".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update")
        .expect("present");

    let listed = storage.list_projects_by_user(owner.id).await.expect("list");
    let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["First, renamed", "Second"]);
}

#[tokio::test]
async fn typography_weights_survive_storage() {
    let storage = mem_storage().await;
    let owner = make_user(&storage, "ada").await;
    let project = storage
        .create_project(owner.id, &project_named("Acme"))
        .await
        .expect("create project");

    let created = storage
        .create_brand_typography(
            project.id,
            &InsertBrandTypography {
                kind: "secondary".to_string(),
                font_family: "Space Mono".to_string(),
                google_font_url: Some("https://fonts.example/space-mono".to_string()),
                weights: vec!["400".to_string(), "700".to_string()],
            },
        )
        .await
        .expect("create typography");

    let fetched = storage
        .get_brand_typography(created.id)
        .await
        .expect("get")
        .expect("present");
    assert_eq!(fetched.weights, vec!["400", "700"]);
    assert_eq!(
        fetched.google_font_url.as_deref(),
        Some("https://fonts.example/space-mono")
    );
}
