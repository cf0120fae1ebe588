/**
 * Backend Error Types
 *
 * Every handler returns `Result<_, BackendError>`. The variants follow the
 * request outcomes the API distinguishes:
 *
 * - `Unauthenticated` - no principal on a route that needs one
 * - `Forbidden` - principal present but not entitled
 * - `NotFound` - entitled, but the target does not exist
 * - `InvalidToken` / `ExpiredToken` - unsubscribe token refused
 * - `InvalidBody` - request body is not the JSON the route expects
 * - `Validation` - well-formed input with bad values
 * - `Database` - storage failure, never masked
 */

use thiserror::Error;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

use crate::backend::auth::guard::AccessError;
use crate::backend::auth::unsubscribe::TokenError;
use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    #[error("Authentication required")]
    Unauthenticated,

    /// Status stays 401 for compatibility with existing clients; the `kind`
    /// field of the body tells it apart from `Unauthenticated`.
    #[error("Not allowed to access this resource")]
    Forbidden,

    #[error("{what} not found")]
    NotFound {
        /// Kind of resource that was looked up
        what: &'static str,
    },

    #[error("Invalid token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("Token has expired")]
    ExpiredToken,

    /// Body missing, not JSON, or not matching the expected shape
    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    /// Shared validation error
    #[error(transparent)]
    SharedError(#[from] SharedError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(what: &'static str) -> Self {
        Self::NotFound { what }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Unauthenticated | Self::Forbidden => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidToken(_) | Self::ExpiredToken => StatusCode::BAD_REQUEST,
            Self::InvalidBody(rejection) => rejection.status(),
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable name of the error
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HandlerError { status, .. } if status.is_server_error() => "internal",
            Self::HandlerError { .. } => "bad_request",
            Self::Unauthenticated => "unauthenticated",
            Self::Forbidden => "forbidden",
            Self::NotFound { .. } => "not_found",
            Self::InvalidToken(_) => "invalid_token",
            Self::ExpiredToken => "expired_token",
            Self::InvalidBody(_) => "invalid_body",
            Self::SharedError(_) => "validation",
            Self::Database(_) => "internal",
        }
    }

    /// Message sent to the client. Internal failures are not described.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<AccessError> for BackendError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Unauthenticated => Self::Unauthenticated,
            AccessError::Forbidden => Self::Forbidden,
        }
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid(source) => Self::InvalidToken(source),
            TokenError::Expired => Self::ExpiredToken,
        }
    }
}
