//! Pages and subscriptions
//!
//! Pages have no routes of their own; they are addressed through the site
//! comment routes and the unsubscribe link.

pub mod db;

pub use db::Page;
