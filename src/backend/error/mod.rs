//! Backend Error Module
//!
//! - **`types`** - `BackendError` and its status/kind mapping
//! - **`conversion`** - `IntoResponse` so handlers can return it directly

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::BackendError;
