/**
 * User HTTP Handlers
 *
 * - `GET /users/{id}` - a user record, filtered by the access rules
 * - `GET /unsubscribe?jwt=<token>` - drop a page subscription via a mailed link
 *
 * `{id}` may be the literal `me`. Existence of the target is only revealed
 * after the access rules have passed.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::SqlitePool;

use super::db::get_user_by_id;
use super::types::UserResponse;
use crate::backend::auth::guard::{authorize, Grant, UserRef};
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::pages::db::remove_subscription;
use crate::backend::server::state::AppState;

/// Body returned after a successful unsubscribe
pub const UNSUBSCRIBED_MESSAGE: &str = "You are now unsubscribed to comments on that page.";

pub async fn get_user(
    State(pool): State<SqlitePool>,
    CurrentUser(principal): CurrentUser,
    Path(raw_id): Path<String>,
) -> Result<Json<UserResponse>, BackendError> {
    let requested = UserRef::parse(&raw_id);

    match authorize(principal.as_ref(), &requested)? {
        Grant::Owner => {
            let principal = principal.ok_or(BackendError::Unauthenticated)?;
            Ok(Json(UserResponse::owner(&principal.user)))
        }
        Grant::Public(UserRef::Id(id)) => {
            let user = get_user_by_id(&pool, id)
                .await?
                .ok_or(BackendError::not_found("User"))?;
            Ok(Json(UserResponse::public(&user)))
        }
        Grant::Public(_) => Err(BackendError::not_found("User")),
    }
}

#[derive(Debug, Deserialize)]
pub struct UnsubscribeQuery {
    pub jwt: Option<String>,
}

pub async fn unsubscribe(
    State(app_state): State<AppState>,
    Query(query): Query<UnsubscribeQuery>,
) -> Result<&'static str, BackendError> {
    let token = query
        .jwt
        .filter(|jwt| !jwt.is_empty())
        .ok_or_else(|| BackendError::handler(StatusCode::BAD_REQUEST, "Missing jwt parameter"))?;

    let claim = app_state.unsubscribe.verify(&token).map_err(|e| {
        tracing::warn!("Rejected unsubscribe token: {}", e);
        BackendError::from(e)
    })?;

    let user = get_user_by_id(&app_state.db_pool, claim.user)
        .await?
        .ok_or(BackendError::not_found("User"))?;

    let removed = remove_subscription(&app_state.db_pool, user.id, claim.page).await?;
    if removed {
        tracing::info!("User {} unsubscribed from page {}", user.id, claim.page);
    } else {
        tracing::debug!("User {} was not subscribed to page {}", user.id, claim.page);
    }

    Ok(UNSUBSCRIBED_MESSAGE)
}
