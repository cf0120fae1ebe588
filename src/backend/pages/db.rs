//! Database operations for pages and page subscriptions
//!
//! A page is identified within its site by the path segment used in the
//! comment routes. Pages are created lazily the first time someone comments.

use std::future::Future;

use serde::Serialize;
use sqlx::{Acquire, Executor, Sqlite, SqlitePool};

/// A commentable page of a site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: i64,
    pub site_id: i64,
    pub url: String,
}

/// Find a page by site and url
pub async fn get_page<'e, E>(executor: E, site_id: i64, url: &str) -> Result<Option<Page>, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query_as::<_, Page>("SELECT id, site_id, url FROM pages WHERE site_id = ? AND url = ?")
        .bind(site_id)
        .bind(url)
        .fetch_optional(executor)
        .await
}

/// Return the page, creating it first if needed
///
/// Accepts a pool or an open transaction.
pub fn get_or_create_page<'a, 'u, A>(
    conn: A,
    site_id: i64,
    url: &'u str,
) -> impl Future<Output = Result<Page, sqlx::Error>> + Send + use<'a, 'u, A>
where
    A: Acquire<'a, Database = Sqlite> + Send,
{
    async move {
        let mut conn = conn.acquire().await?;

        sqlx::query("INSERT INTO pages (site_id, url) VALUES (?, ?) ON CONFLICT (site_id, url) DO NOTHING")
            .bind(site_id)
            .bind(url)
            .execute(&mut *conn)
            .await?;

        get_page(&mut *conn, site_id, url)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }
}

/// Subscribe a user to new comments on a page. Subscribing twice is a no-op.
pub async fn add_subscription<'e, E>(executor: E, user_id: i64, page_id: i64) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO subscriptions (user_id, page_id)
        VALUES (?, ?)
        ON CONFLICT (user_id, page_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(page_id)
    .execute(executor)
    .await?;

    Ok(())
}

/// Remove a subscription
///
/// # Returns
/// Whether a subscription existed
pub async fn remove_subscription(
    pool: &SqlitePool,
    user_id: i64,
    page_id: i64,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM subscriptions WHERE user_id = ? AND page_id = ?")
        .bind(user_id)
        .bind(page_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Ids of the users subscribed to a page
pub async fn list_subscribers(pool: &SqlitePool, page_id: i64) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT user_id FROM subscriptions WHERE page_id = ? ORDER BY user_id",
    )
    .bind(page_id)
    .fetch_all(pool)
    .await
}
