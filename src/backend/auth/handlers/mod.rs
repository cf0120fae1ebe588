//! Authentication Handlers Module
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports
//! ├── types.rs    - Response types
//! └── login.rs    - Development login handler
//! ```
//!
//! - **`test_login`** - GET /login/{id} - session token for a known user,
//!   mounted only when `allow_test_login` is enabled

/// Response types
pub mod types;

/// Development login handler
pub mod login;

pub use login::test_login;
pub use types::AuthResponse;
