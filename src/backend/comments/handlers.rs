//! Page comment HTTP Handlers
//!
//! - `GET /sites/{site_id}/pages/{page}/comments/` - comments with author info
//! - `POST /sites/{site_id}/pages/{page}/comments/` - add a comment (requires a session)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use super::db::{self, CommentWithAuthor};
use super::notify::pending_notifications;
use crate::backend::error::BackendError;
use crate::backend::middleware::{ApiJson, AuthUser};
use crate::backend::pages::db::{add_subscription, get_or_create_page, get_page};
use crate::backend::server::state::AppState;
use crate::backend::sites::db::get_site_by_id;
use crate::shared::error::require_non_blank;
use crate::shared::SharedError;

/// Body of `POST .../comments/`
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
    /// Comment being replied to; must belong to the same page
    #[serde(default)]
    pub parent: Option<i64>,
}

async fn require_site(pool: &SqlitePool, site_id: i64) -> Result<(), BackendError> {
    match get_site_by_id(pool, site_id).await? {
        Some(_) => Ok(()),
        None => Err(BackendError::not_found("Site")),
    }
}

pub async fn list_page_comments(
    State(pool): State<SqlitePool>,
    Path((site_id, page_url)): Path<(i64, String)>,
) -> Result<Json<Vec<CommentWithAuthor>>, BackendError> {
    require_site(&pool, site_id).await?;

    let comments = match get_page(&pool, site_id, &page_url).await? {
        Some(page) => db::list_comments_for_page(&pool, page.id).await?,
        None => Vec::new(),
    };

    Ok(Json(comments))
}

/// Store the comment and subscribe its author to the page
///
/// The page row, the comment and the subscription are written in one
/// transaction, and only after the request passed validation.
pub async fn create_page_comment(
    State(app_state): State<AppState>,
    AuthUser(principal): AuthUser,
    Path((site_id, page_url)): Path<(i64, String)>,
    ApiJson(request): ApiJson<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentWithAuthor>), BackendError> {
    let pool = &app_state.db_pool;
    require_site(pool, site_id).await?;
    let text = require_non_blank("text", &request.text)?;

    if let Some(parent_id) = request.parent {
        // A page that does not exist yet has no comments to reply to
        let page_id = get_page(pool, site_id, &page_url).await?.map(|page| page.id);
        let parent_page_id = db::get_comment_by_id(pool, parent_id)
            .await?
            .map(|parent| parent.page_id);
        if page_id.is_none() || parent_page_id != page_id {
            return Err(SharedError::validation("parent", "Parent comment is not on this page").into());
        }
    }

    let mut tx = pool.begin().await?;
    let page = get_or_create_page(&mut *tx, site_id, &page_url).await?;
    let comment = db::create_comment(&mut *tx, page.id, principal.id(), text, request.parent).await?;
    add_subscription(&mut *tx, principal.id(), page.id).await?;
    tx.commit().await?;

    tracing::info!("Comment {} added to page {} by user {}", comment.id, page.id, principal.id());

    let notifications = pending_notifications(&app_state, &comment).await?;
    for notification in &notifications {
        tracing::debug!("Pending {}", notification);
    }

    let created = db::get_comment_with_author(pool, comment.id)
        .await?
        .ok_or(BackendError::not_found("Comment"))?;

    Ok((StatusCode::CREATED, Json(created)))
}
