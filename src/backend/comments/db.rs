//! Database operations for comments

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{Executor, Sqlite, SqlitePool};

/// A stored comment
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub page_id: i64,
    pub user_id: i64,
    pub parent_id: Option<i64>,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A comment joined with the public fields of its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithAuthor {
    pub id: i64,
    pub page_id: i64,
    pub user_id: i64,
    pub parent_id: Option<i64>,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub display_name: String,
    pub avatar: Option<String>,
}

const COMMENT_WITH_AUTHOR_COLUMNS: &str = r#"
    SELECT c.id, c.page_id, c.user_id, c.parent_id, c.text, c.created_at,
           u.display_name, u.avatar
    FROM comments c
    JOIN users u ON u.id = c.user_id
"#;

/// Store a new comment
pub async fn create_comment<'e, E>(
    executor: E,
    page_id: i64,
    user_id: i64,
    text: &str,
    parent_id: Option<i64>,
) -> Result<Comment, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (page_id, user_id, parent_id, text, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, page_id, user_id, parent_id, text, created_at
        "#,
    )
    .bind(page_id)
    .bind(user_id)
    .bind(parent_id)
    .bind(text)
    .bind(Utc::now())
    .fetch_one(executor)
    .await
}

/// Get a comment by ID
pub async fn get_comment_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Comment>, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        "SELECT id, page_id, user_id, parent_id, text, created_at FROM comments WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Get a comment with its author by ID
pub async fn get_comment_with_author(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(&format!("{} WHERE c.id = ?", COMMENT_WITH_AUTHOR_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Comments of a page with author info, oldest first
pub async fn list_comments_for_page(
    pool: &SqlitePool,
    page_id: i64,
) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(&format!(
        "{} WHERE c.page_id = ? ORDER BY c.created_at, c.id",
        COMMENT_WITH_AUTHOR_COLUMNS
    ))
    .bind(page_id)
    .fetch_all(pool)
    .await
}
