//! HTTP backend: routes, handlers, persistence and authentication

pub mod server;

pub mod routes;

pub mod error;

pub mod auth;

pub mod middleware;

pub mod users;

pub mod sites;

pub mod pages;

pub mod comments;

pub use error::BackendError;
pub use server::create_app;
