/**
 * API Route Handlers
 *
 * ## Users
 * - `GET /users/{id}` - user record, filtered by the access rules
 * - `GET /unsubscribe` and `GET /users/unsubscribe` - unsubscribe link target
 * - `GET /login/{id}` - development login (only when enabled)
 *
 * ## Sites and comments
 * - `GET /sites/`, `POST /sites/`, `GET /sites/{site_id}`
 * - `GET /sites/{site_id}/pages/{page}/comments/`
 * - `POST /sites/{site_id}/pages/{page}/comments/`
 */

use axum::{
    routing::{get, MethodRouter},
    Router,
};

use crate::backend::auth::handlers::test_login;
use crate::backend::comments::handlers::{create_page_comment, list_page_comments};
use crate::backend::server::state::AppState;
use crate::backend::sites::handlers::{create_site, get_site, list_sites};
use crate::backend::users::handlers::{get_user, unsubscribe};

/// Mount `handler` on `path` and on `path` with a trailing slash
fn route_both(
    router: Router<AppState>,
    path: &str,
    handler: MethodRouter<AppState>,
) -> Router<AppState> {
    let trimmed = path.trim_end_matches('/');
    router
        .route(trimmed, handler.clone())
        .route(&format!("{}/", trimmed), handler)
}

pub fn configure_api_routes(router: Router<AppState>, allow_test_login: bool) -> Router<AppState> {
    let router = route_both(router, "/unsubscribe", get(unsubscribe));
    let router = route_both(router, "/users/unsubscribe", get(unsubscribe));
    let router = route_both(router, "/users/{id}", get(get_user));

    let router = route_both(router, "/sites", get(list_sites).post(create_site));
    let router = route_both(router, "/sites/{site_id}", get(get_site));
    let router = route_both(
        router,
        "/sites/{site_id}/pages/{page}/comments",
        get(list_page_comments).post(create_page_comment),
    );

    if allow_test_login {
        tracing::warn!("Test login route enabled");
        route_both(router, "/login/{id}", get(test_login))
    } else {
        router
    }
}
