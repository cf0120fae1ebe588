//! Users
//!
//! User records, their HTTP representation and the user-facing handlers.

pub mod db;
pub mod handlers;
pub mod types;

pub use db::{NewUser, User};
pub use types::UserResponse;
