/**
 * Session Middleware
 *
 * Resolves the `Authorization: Bearer <token>` header into a `Principal`
 * stored in the request extensions. The middleware never rejects a request
 * for a bad or stale token: such requests simply continue as anonymous, and
 * routes that need a caller use the `AuthUser` extractor to answer 401.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::guard::Principal;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::users::db::get_user_by_id;

/// Session middleware
///
/// 1. Extracts the bearer token, if any
/// 2. Verifies it with the session keys
/// 3. Loads the user it names
/// 4. Attaches the resulting `Principal` to the request extensions
///
/// Database failures while loading the user propagate as 500.
pub async fn session_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    if let Some(user_id) = session_user_id(request.headers(), &app_state.sessions) {
        match get_user_by_id(&app_state.db_pool, user_id).await? {
            Some(user) => {
                tracing::debug!("Request authenticated as user {}", user.id);
                request.extensions_mut().insert(Principal::new(user));
            }
            None => tracing::warn!("Session refers to missing user {}", user_id),
        }
    }

    Ok(next.run(request).await)
}

/// User id of a valid session token in `headers`, if any
fn session_user_id(headers: &HeaderMap, keys: &SessionKeys) -> Option<i64> {
    let auth_header = headers.get(AUTHORIZATION)?.to_str().ok()?;

    let Some(token) = auth_header.strip_prefix("Bearer ") else {
        tracing::warn!("Invalid Authorization header format");
        return None;
    };

    let claims = keys
        .verify_token(token)
        .map_err(|e| tracing::warn!("Invalid session token: {:?}", e))
        .ok()?;

    let user_id = claims.user_id();
    if user_id.is_none() {
        tracing::warn!("Session token with non-numeric subject: {}", claims.sub);
    }
    user_id
}

/// The caller, if the request carries a valid session
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Option<Principal>);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(parts.extensions.get::<Principal>().cloned()))
    }
}

/// The caller of a route that requires a session; rejects with 401 otherwise
#[derive(Clone, Debug)]
pub struct AuthUser(pub Principal);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthUser)
            .ok_or(BackendError::Unauthenticated)
    }
}
