/**
 * User Model and Database Operations
 */

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::backend::auth::guard::Role;

/// User struct representing a row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Name shown next to comments
    pub display_name: String,
    /// Avatar image URL
    pub avatar: Option<String>,
    /// Contact address, private to the owner
    pub email: Option<String>,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to create a user
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub display_name: String,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub role: Role,
}

impl NewUser {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }
}

/// Create a new user
pub async fn create_user(pool: &SqlitePool, new_user: &NewUser) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (display_name, avatar, email, role, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, display_name, avatar, email, role, created_at
        "#,
    )
    .bind(&new_user.display_name)
    .bind(&new_user.avatar)
    .bind(&new_user.email)
    .bind(new_user.role.as_str())
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, display_name, avatar, email, role, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
