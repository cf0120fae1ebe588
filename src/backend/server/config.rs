/**
 * Database Setup
 *
 * Opens the SQLite database named by the configuration and brings its schema
 * up to date with the embedded migrations. Unlike optional services, the
 * database is required: startup fails if it cannot be opened.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Pool size for file-backed databases
const MAX_CONNECTIONS: u32 = 5;

/// Connect to the database and run migrations
///
/// `sqlite::memory:` URLs get a single connection that is never recycled,
/// since every new connection would otherwise see an empty database.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let in_memory = database_url.contains(":memory:") || database_url.contains("mode=memory");
    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };

    tracing::info!("Connecting to database...");
    let pool = pool_options.connect_with(options).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
