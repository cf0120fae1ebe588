//! Some Comments - Main Library
//!
//! A self-hosted comment engine: sites embed threaded comments on their
//! pages, readers subscribe to pages they commented on and leave again
//! through signed unsubscribe links.
//!
//! # Module Structure
//!
//! - **`shared`** - configuration and errors used across the crate
//! - **`backend`** - Axum HTTP server, SQLite persistence, session and
//!   unsubscribe tokens, access rules
//!
//! # Usage
//!
//! ```rust,no_run
//! use some_comments::backend::server::init::create_app;
//! use some_comments::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load(None)?;
//! let app = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Configuration and shared error types
pub mod shared;

/// Backend server-side code
pub mod backend;
