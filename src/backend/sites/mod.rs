//! Sites
//!
//! A site is a domain that embeds the comment engine; its pages hold the
//! comments.

pub mod db;
pub mod handlers;

pub use db::Site;
