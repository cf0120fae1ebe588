//! Server Module
//!
//! - **`state`** - shared application state
//! - **`config`** - database connection and migrations
//! - **`init`** - state and router assembly

pub mod state;

pub mod config;

pub mod init;

pub use init::{build_state, create_app};
pub use state::AppState;
