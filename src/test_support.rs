//! Fixtures shared by the in-crate test modules: an in-memory SQLite database
//! migrated with the production migrations, plus row builders.

use migration::{ Migrator, MigratorTrait };
use sea_orm::{ ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, Set };
use uuid::Uuid;

use crate::crypto::hash_session_token;
use crate::db::entity::{ address, membership, organization, session, user, Address };
use crate::enums::{ GlobalRole, MembershipRole };

pub async fn setup_db() -> DatabaseConnection {
    // A single pooled connection keeps every query on the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn create_user(db: &DatabaseConnection, id: i32, email: &str) -> user::Model {
    let now = chrono::Utc::now();
    user::ActiveModel {
        id: Set(id),
        name: Set(None),
        email: Set(email.to_string()),
        role: Set(GlobalRole::User.as_str().to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
        .insert(db).await
        .expect("insert user")
}

pub async fn create_organization(db: &DatabaseConnection, name: &str) -> i32 {
    let now = chrono::Utc::now();
    let organization = organization::ActiveModel {
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
        .insert(db).await
        .expect("insert organization");

    organization.id
}

pub async fn add_membership(
    db: &DatabaseConnection,
    user_id: i32,
    organization_id: i32,
    role: MembershipRole
) -> membership::Model {
    add_membership_with_role(db, user_id, organization_id, role.as_str()).await
}

/// Inserts a membership with a raw role string, including ones the app does not know.
pub async fn add_membership_with_role(
    db: &DatabaseConnection,
    user_id: i32,
    organization_id: i32,
    role: &str
) -> membership::Model {
    let now = chrono::Utc::now();
    membership::ActiveModel {
        role: Set(role.to_string()),
        organization_id: Set(organization_id),
        user_id: Set(user_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
        .insert(db).await
        .expect("insert membership")
}

pub async fn create_address(db: &DatabaseConnection, id: i32, user_id: i32) -> address::Model {
    let now = chrono::Utc::now();
    address::ActiveModel {
        id: Set(id),
        user_id: Set(user_id),
        title: Set("Office".to_string()),
        detail: Set("Reception desk".to_string()),
        country: Set("Old country".to_string()),
        city: Set("Old city".to_string()),
        district: Set("Old district".to_string()),
        street: Set("Old street".to_string()),
        postal_code: Set("11111".to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
        .insert(db).await
        .expect("insert address")
}

pub async fn find_address(db: &DatabaseConnection, id: i32) -> address::Model {
    Address::find_by_id(id).one(db).await.expect("query address").expect("address exists")
}

/// Stores a session whose bearer token is `token`.
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
    token: &str,
    expires_at: Option<chrono::DateTime<chrono::Utc>>
) -> session::Model {
    session::ActiveModel {
        id: Set(Uuid::new_v4()),
        handle: Set(format!("{}:{}", user_id, Uuid::new_v4())),
        hashed_session_token: Set(hash_session_token(token)),
        user_id: Set(user_id),
        expires_at: Set(expires_at),
        created_at: Set(chrono::Utc::now()),
    }
        .insert(db).await
        .expect("insert session")
}
