/**
 * Application State Management
 *
 * `AppState` is cloned into every request. It only holds read-only data:
 * the connection pool (internally synchronised), the validated configuration
 * and the key material derived from the shared secret.
 *
 * The `FromRef` implementations let handlers extract just the part they need,
 * e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::auth::unsubscribe::UnsubscribeTokens;
use crate::shared::AppConfig;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Validated configuration
    pub config: Arc<AppConfig>,

    /// Session token keys, derived from the shared secret
    pub sessions: SessionKeys,

    /// Unsubscribe token keys, derived from the same secret
    pub unsubscribe: UnsubscribeTokens,
}

impl AppState {
    pub fn new(config: AppConfig, db_pool: SqlitePool) -> Self {
        let sessions = SessionKeys::new(&config.secret);
        let unsubscribe = UnsubscribeTokens::new(&config.secret);

        Self {
            db_pool,
            config: Arc::new(config),
            sessions,
            unsubscribe,
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for UnsubscribeTokens {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.unsubscribe.clone()
    }
}
