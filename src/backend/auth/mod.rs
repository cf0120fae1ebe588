//! Authentication Module
//!
//! Session tokens, unsubscribe tokens and the access rules for user records.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports
//! ├── sessions.rs     - Session JWTs (`Authorization: Bearer`)
//! ├── unsubscribe.rs  - Signed unsubscribe claims and links
//! ├── guard.rs        - Roles, principals and the access decision
//! └── handlers/       - HTTP handlers
//! ```
//!
//! Both token kinds are HS256 JWTs signed with the one configured secret.
//! A token that fails verification never identifies anybody.

/// Session token generation and validation
pub mod sessions;

/// Unsubscribe token generation and validation
pub mod unsubscribe;

/// Access rules for user records
pub mod guard;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use guard::{authorize, AccessError, Grant, Principal, Role, UserRef};
pub use sessions::{Claims, SessionKeys};
pub use unsubscribe::{TokenError, UnsubscribeClaim, UnsubscribeTokens};
