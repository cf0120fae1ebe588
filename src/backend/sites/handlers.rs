//! Site HTTP Handlers
//!
//! - `GET /sites/` - list sites
//! - `POST /sites/` - create a site owned by the caller (requires a session)
//! - `GET /sites/{site_id}` - one site

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use super::db::{self, Site};
use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiJson, AuthUser};
use crate::shared::error::require_non_blank;

/// Body of `POST /sites/`
#[derive(Debug, Deserialize)]
pub struct CreateSiteRequest {
    pub domain: String,
}

pub async fn list_sites(State(pool): State<SqlitePool>) -> Result<Json<Vec<Site>>, BackendError> {
    Ok(Json(db::list_sites(&pool).await?))
}

pub async fn get_site(
    State(pool): State<SqlitePool>,
    Path(site_id): Path<i64>,
) -> Result<Json<Site>, BackendError> {
    db::get_site_by_id(&pool, site_id)
        .await?
        .map(Json)
        .ok_or(BackendError::not_found("Site"))
}

pub async fn create_site(
    State(pool): State<SqlitePool>,
    AuthUser(principal): AuthUser,
    ApiJson(request): ApiJson<CreateSiteRequest>,
) -> Result<(StatusCode, Json<Site>), BackendError> {
    let domain = require_non_blank("domain", &request.domain)?;

    let site = db::create_site(&pool, domain, Some(principal.id())).await?;
    tracing::info!("Site {} ({}) created by user {}", site.id, site.domain, principal.id());

    Ok((StatusCode::CREATED, Json(site)))
}
