/**
 * Router Configuration
 *
 * Combines the API routes with the health check, the 404 fallback and the
 * request layers into a single Axum router.
 *
 * # Layers
 *
 * The session middleware runs for every route and attaches the caller, if
 * any, to the request. `TraceLayer` wraps everything so rejected requests
 * are traced too.
 */

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::session_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(|| async { "ok" }));

    let router = configure_api_routes(router, app_state.config.allow_test_login);

    let router = router.fallback(|| async { BackendError::not_found("Route") });

    router
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
