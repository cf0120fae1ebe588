//! Database operations for sites

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;

/// A site embedding the comment engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: i64,
    pub domain: String,
    pub owner_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Create a new site
pub async fn create_site(
    pool: &SqlitePool,
    domain: &str,
    owner_id: Option<i64>,
) -> Result<Site, sqlx::Error> {
    sqlx::query_as::<_, Site>(
        r#"
        INSERT INTO sites (domain, owner_id, created_at)
        VALUES (?, ?, ?)
        RETURNING id, domain, owner_id, created_at
        "#,
    )
    .bind(domain)
    .bind(owner_id)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
}

/// Get a site by ID
pub async fn get_site_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Site>, sqlx::Error> {
    sqlx::query_as::<_, Site>("SELECT id, domain, owner_id, created_at FROM sites WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// All sites, oldest first
pub async fn list_sites(pool: &SqlitePool) -> Result<Vec<Site>, sqlx::Error> {
    sqlx::query_as::<_, Site>("SELECT id, domain, owner_id, created_at FROM sites ORDER BY id")
        .fetch_all(pool)
        .await
}
