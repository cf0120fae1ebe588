/**
 * User Response Types
 *
 * The same user serialises differently depending on who asks: the owner view
 * carries private fields, the public view never does.
 */

use serde::{Deserialize, Serialize};

use crate::backend::users::db::User;

/// User as returned over HTTP
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub display_name: String,
    pub avatar: Option<String>,
    /// Only present in the owner view
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserResponse {
    /// Everything the owner may see about themselves
    pub fn owner(user: &User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name.clone(),
            avatar: user.avatar.clone(),
            email: user.email.clone(),
        }
    }

    /// What anybody else may see
    pub fn public(user: &User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name.clone(),
            avatar: user.avatar.clone(),
            email: None,
        }
    }
}
