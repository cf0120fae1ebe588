//! JSON body extractor
//!
//! `axum::Json` answers malformed bodies with a plain-text rejection. Routes
//! take `ApiJson` instead so those failures carry the usual
//! `{error, kind, status}` body.

use axum::extract::FromRequest;

use crate::backend::error::BackendError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct ApiJson<T>(pub T);
