//! Access guard for user resources
//!
//! Decides whether the caller may read `/users/{id}`. The decision is a pure
//! function of the principal and the requested id; existence of the target
//! is checked by the caller only after access was granted, so an
//! unauthorized caller cannot probe which ids exist.

use std::fmt;

use thiserror::Error;

use crate::backend::users::db::User;

/// Alias that always resolves to the caller
pub const SELF_ALIAS: &str = "me";

/// Privilege level of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    User,
    /// May read the public record of any user
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(String);

impl TryFrom<String> for Role {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(UnknownRole(value)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated caller of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user: User,
}

impl Principal {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn id(&self) -> i64 {
        self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }
}

/// The user a request addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    /// The `me` alias
    Me,
    Id(i64),
    /// Anything that is neither the alias nor a number
    Unknown(String),
}

impl UserRef {
    pub fn parse(raw: &str) -> Self {
        if raw == SELF_ALIAS {
            return UserRef::Me;
        }
        match raw.parse::<i64>() {
            Ok(id) => UserRef::Id(id),
            Err(_) => UserRef::Unknown(raw.to_string()),
        }
    }
}

/// What the caller is allowed to see
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    /// Caller addresses itself: full record, private fields included
    Owner,
    /// Caller may see the public record of this user, if it exists
    Public(UserRef),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("authentication required")]
    Unauthenticated,
    #[error("not allowed to view this user")]
    Forbidden,
}

/// Evaluate the access rules, first match wins:
///
/// 1. no principal: `Unauthenticated`
/// 2. `me` or the caller's own id: `Owner`
/// 3. admins get the public view of anybody
/// 4. everybody else: `Forbidden`
pub fn authorize(principal: Option<&Principal>, requested: &UserRef) -> Result<Grant, AccessError> {
    let principal = principal.ok_or(AccessError::Unauthenticated)?;

    match requested {
        UserRef::Me => return Ok(Grant::Owner),
        UserRef::Id(id) if *id == principal.id() => return Ok(Grant::Owner),
        _ => {}
    }

    if principal.role() == Role::Admin {
        return Ok(Grant::Public(requested.clone()));
    }

    Err(AccessError::Forbidden)
}
