//! User API integration tests
//!
//! Access rules of `GET /users/{id}`.

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;

use crate::common::{create_admin, create_regular_user, create_test_user, TestApp};
use some_comments::backend::users::db::NewUser;

#[tokio::test]
async fn test_anonymous_is_unauthenticated() {
    let app = TestApp::new().await;
    let user = create_regular_user(&app, "Test User").await;

    let response = app.get(&format!("/users/{}", user.id()), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["kind"], "unauthenticated");
    assert_eq!(
        response.headers.get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

#[tokio::test]
async fn test_owner_sees_private_fields() {
    let app = TestApp::new().await;
    let user = create_regular_user(&app, "Test User").await;

    let response = app
        .get(&format!("/users/{}", user.id()), Some(&user.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.json(),
        serde_json::json!({
            "id": user.id(),
            "displayName": "Test User",
            "avatar": "http://my.avatar/jpg",
            "email": "test.user@example.com",
        })
    );
}

#[tokio::test]
async fn test_me_alias_matches_own_id() {
    let app = TestApp::new().await;
    let user = create_regular_user(&app, "Test User").await;

    let by_id = app
        .get(&format!("/users/{}", user.id()), Some(&user.token))
        .await;
    let by_alias = app.get("/users/me", Some(&user.token)).await;

    assert_eq!(by_alias.status, StatusCode::OK);
    assert_eq!(by_alias.json(), by_id.json());
}

#[tokio::test]
async fn test_owner_without_email_has_no_email_field() {
    let app = TestApp::new().await;
    let user = create_test_user(&app, NewUser::new("No Mail")).await;

    let body = app.get("/users/me", Some(&user.token)).await.json();

    assert_eq!(body["displayName"], "No Mail");
    assert!(body.get("email").is_none());
}

#[tokio::test]
async fn test_other_user_is_forbidden() {
    let app = TestApp::new().await;
    let alice = create_regular_user(&app, "Alice").await;
    let bob = create_regular_user(&app, "Bob").await;

    let response = app
        .get(&format!("/users/{}", bob.id()), Some(&alice.token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["kind"], "forbidden");
    assert!(response.headers.get(header::WWW_AUTHENTICATE).is_none());
}

#[tokio::test]
async fn test_missing_user_does_not_leak_for_non_admin() {
    let app = TestApp::new().await;
    let alice = create_regular_user(&app, "Alice").await;

    let response = app.get("/users/9999", Some(&alice.token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app.get("/users/someone", Some(&alice.token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_sees_public_view() {
    let app = TestApp::new().await;
    let admin = create_admin(&app).await;
    let bob = create_regular_user(&app, "Bob").await;

    let response = app
        .get(&format!("/users/{}", bob.id()), Some(&admin.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["displayName"], "Bob");
    assert!(body.get("email").is_none());
}

#[tokio::test]
async fn test_admin_missing_user_is_not_found() {
    let app = TestApp::new().await;
    let admin = create_admin(&app).await;

    let response = app.get("/users/9999", Some(&admin.token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["kind"], "not_found");

    let response = app.get("/users/someone", Some(&admin.token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_session_token_is_anonymous() {
    let app = TestApp::new().await;
    let user = create_regular_user(&app, "Test User").await;

    let response = app.get("/users/me", Some("not-a-token")).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["kind"], "unauthenticated");

    let foreign = some_comments::backend::auth::SessionKeys::new("another-secret")
        .create_token(user.id())
        .unwrap();
    let response = app.get("/users/me", Some(&foreign)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_for_deleted_user_is_anonymous() {
    let app = TestApp::new().await;
    let user = create_regular_user(&app, "Gone").await;
    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user.id())
        .execute(app.pool())
        .await
        .unwrap();

    let response = app.get("/users/me", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["kind"], "unauthenticated");
}

#[tokio::test]
async fn test_trailing_slash_and_unknown_routes() {
    let app = TestApp::new().await;
    let user = create_regular_user(&app, "Test User").await;

    let response = app.get("/users/me/", Some(&user.token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.get("/nothing/here", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.get("/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "ok");
}
