/**
 * Development Login Handler
 *
 * `GET /login/{id}` hands out a session token for an existing user without
 * any credential check. The route only exists when `allow_test_login` is
 * enabled, and the handler checks the flag again so it stays inert if
 * mounted by mistake.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::backend::auth::handlers::types::AuthResponse;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::users::db::get_user_by_id;
use crate::backend::users::types::UserResponse;

/// Issue a session token for user `{id}`
///
/// # Errors
///
/// * `404 Not Found` - test login is disabled or the user does not exist
/// * `500 Internal Server Error` - database query or token generation fails
pub async fn test_login(
    State(app_state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<AuthResponse>, BackendError> {
    if !app_state.config.allow_test_login {
        tracing::warn!("Test login attempted while disabled");
        return Err(BackendError::not_found("Route"));
    }

    let user = get_user_by_id(&app_state.db_pool, user_id)
        .await?
        .ok_or(BackendError::not_found("User"))?;

    let token = app_state.sessions.create_token(user.id).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::handler(
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to create token",
        )
    })?;

    tracing::info!("Test login for user {} ({})", user.id, user.display_name);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::owner(&user),
    }))
}
