//! Property-based tests for the access rules

use chrono::Utc;
use proptest::prelude::*;
use some_comments::backend::auth::{authorize, AccessError, Grant, Principal, Role, UserRef};
use some_comments::backend::users::User;

fn principal(id: i64, role: Role) -> Principal {
    Principal::new(User {
        id,
        display_name: "Someone".to_string(),
        avatar: None,
        email: None,
        role,
        created_at: Utc::now(),
    })
}

fn user_ref() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("me".to_string()),
        any::<i64>().prop_map(|id| id.to_string()),
        "[a-z]{1,8}",
    ]
}

proptest! {
    #[test]
    fn test_anonymous_always_unauthenticated(raw in user_ref()) {
        let result = authorize(None, &UserRef::parse(&raw));
        prop_assert_eq!(result, Err(AccessError::Unauthenticated));
    }

    #[test]
    fn test_self_access_always_owner(id in any::<i64>(), admin in any::<bool>()) {
        let role = if admin { Role::Admin } else { Role::User };
        let caller = principal(id, role);

        prop_assert_eq!(authorize(Some(&caller), &UserRef::Me), Ok(Grant::Owner));
        prop_assert_eq!(
            authorize(Some(&caller), &UserRef::parse(&id.to_string())),
            Ok(Grant::Owner)
        );
    }

    #[test]
    fn test_non_admin_never_reads_others(id in any::<i64>(), raw in user_ref()) {
        let caller = principal(id, Role::User);
        let requested = UserRef::parse(&raw);
        let result = authorize(Some(&caller), &requested);

        match requested {
            UserRef::Me => prop_assert_eq!(result, Ok(Grant::Owner)),
            UserRef::Id(other) if other == id => prop_assert_eq!(result, Ok(Grant::Owner)),
            _ => prop_assert_eq!(result, Err(AccessError::Forbidden)),
        }
    }

    #[test]
    fn test_admin_gets_public_view_of_others(id in any::<i64>(), other in any::<i64>()) {
        prop_assume!(id != other);
        let caller = principal(id, Role::Admin);
        let requested = UserRef::Id(other);

        prop_assert_eq!(
            authorize(Some(&caller), &requested),
            Ok(Grant::Public(requested.clone()))
        );
    }
}
