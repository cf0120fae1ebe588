//! Middleware Module
//!
//! - **`auth`** - session middleware and the `CurrentUser` / `AuthUser` extractors
//! - **`json`** - `ApiJson`, a JSON body extractor with `BackendError` rejections

pub mod auth;

pub mod json;

pub use auth::{session_middleware, AuthUser, CurrentUser};
pub use json::ApiJson;
