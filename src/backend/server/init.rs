/**
 * Server Initialization
 *
 * 1. Open the database and run migrations
 * 2. Derive the token keys from the configured secret
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::connect_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Build the shared state for `config`
pub async fn build_state(config: AppConfig) -> Result<AppState, sqlx::Error> {
    let db_pool = connect_database(&config.database_url).await?;
    Ok(AppState::new(config, db_pool))
}

/// Build the complete application for `config`
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing comment server");

    let app_state = build_state(config).await?;
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
