//! Unsubscribe tokens
//!
//! Notification mails carry a link with a signed `{user, page}` claim. The
//! link works without a session: the signature is the only proof needed to
//! drop the subscription. Nothing is stored server side, so a token stays
//! usable until its optional `exp` passes.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::sessions::unix_now;

/// Decoded payload of an unsubscribe token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsubscribeClaim {
    /// Subscriber user id
    pub user: i64,
    /// Page id the subscription refers to
    pub page: i64,
    /// Optional expiry (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// Why a token was refused
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid unsubscribe token")]
    Invalid(#[source] jsonwebtoken::errors::Error),
    #[error("unsubscribe token has expired")]
    Expired,
}

/// Issues and verifies unsubscribe tokens with the shared secret
#[derive(Clone)]
pub struct UnsubscribeTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl UnsubscribeTokens {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Mint a token that never expires
    pub fn issue(&self, user: i64, page: i64) -> Result<String, jsonwebtoken::errors::Error> {
        self.sign(&UnsubscribeClaim {
            user,
            page,
            exp: None,
        })
    }

    /// Mint a token that stops working after `ttl_secs`
    pub fn issue_with_ttl(
        &self,
        user: i64,
        page: i64,
        ttl_secs: u64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.sign(&UnsubscribeClaim {
            user,
            page,
            exp: Some(unix_now() + ttl_secs),
        })
    }

    fn sign(&self, claim: &UnsubscribeClaim) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claim, &self.encoding)
    }

    /// Check the signature and return the claim
    ///
    /// The payload is only decoded after the signature verified, so a token
    /// signed with another secret never yields its fields.
    pub fn verify(&self, token: &str) -> Result<UnsubscribeClaim, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = true;

        decode::<UnsubscribeClaim>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(err),
            })
    }

    /// Build the link placed in notification mails
    pub fn unsubscribe_link(
        &self,
        public_url: &str,
        user: i64,
        page: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let token = self.issue(user, page)?;
        Ok(format!(
            "{}/unsubscribe?jwt={}",
            public_url.trim_end_matches('/'),
            token
        ))
    }
}

impl std::fmt::Debug for UnsubscribeTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsubscribeTokens").finish_non_exhaustive()
    }
}
