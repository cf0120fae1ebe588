/**
 * Authentication Handler Types
 *
 * Response types of the authentication handlers.
 */

use serde::Serialize;

use crate::backend::users::types::UserResponse;

/// Auth response
///
/// Contains the session token and the owner view of the user it was
/// issued for.
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    /// Session token for the `Authorization: Bearer` header (30-day expiration)
    pub token: String,
    pub user: UserResponse,
}
