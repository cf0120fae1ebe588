//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - Users, sites and comment endpoints
//! ```
//!
//! # Routes
//!
//! - `GET /users/{id}` - user record (`{id}` may be `me`)
//! - `GET /unsubscribe?jwt=` - unsubscribe link target (also under `/users`)
//! - `GET /login/{id}` - development login, only with `allow_test_login`
//! - `GET|POST /sites/`, `GET /sites/{site_id}`
//! - `GET|POST /sites/{site_id}/pages/{page}/comments/`
//! - `GET /health`
//!
//! Collection routes answer with and without the trailing slash.

pub mod router;

pub mod api_routes;

pub use router::create_router;
