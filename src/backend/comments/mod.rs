//! Comments
//!
//! Comments belong to a page and may reply to another comment on the same
//! page. Posting a comment subscribes its author to the page.

pub mod db;
pub mod handlers;
pub mod notify;

pub use db::{Comment, CommentWithAuthor};
