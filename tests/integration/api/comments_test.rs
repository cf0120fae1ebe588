//! Page comment API integration tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{create_regular_user, TestApp};
use some_comments::backend::pages::db::{get_page, list_subscribers};
use some_comments::backend::sites::db::create_site;

#[tokio::test]
async fn test_post_and_list_comments() {
    let app = TestApp::new().await;
    let author = create_regular_user(&app, "Test User").await;
    let site = create_site(app.pool(), "mydomain", None).await.unwrap();
    let uri = format!("/sites/{}/pages/testpage/comments/", site.id);

    let response = app
        .post_json(&uri, Some(&author.token), json!({ "text": "This is Some Comment." }))
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let created = response.json();
    assert_eq!(created["text"], "This is Some Comment.");
    assert_eq!(created["displayName"], "Test User");
    assert_eq!(created["avatar"], "http://my.avatar/jpg");
    assert!(created["parentId"].is_null());

    let reply = app
        .post_json(
            &uri,
            Some(&author.token),
            json!({ "text": "A reply", "parent": created["id"] }),
        )
        .await;
    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.json()["parentId"], created["id"]);

    let listed = app.get(&uri, None).await;
    assert_eq!(listed.status, StatusCode::OK);
    let comments = listed.json();
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["id"], created["id"]);
    assert_eq!(comments[1]["text"], "A reply");
}

#[tokio::test]
async fn test_author_is_subscribed() {
    let app = TestApp::new().await;
    let author = create_regular_user(&app, "Test User").await;
    let site = create_site(app.pool(), "mydomain", None).await.unwrap();

    app.post_json(
        &format!("/sites/{}/pages/testpage/comments", site.id),
        Some(&author.token),
        json!({ "text": "Hello" }),
    )
    .await;

    let page = get_page(app.pool(), site.id, "testpage").await.unwrap().unwrap();
    assert_eq!(
        list_subscribers(app.pool(), page.id).await.unwrap(),
        vec![author.id()]
    );
}

#[tokio::test]
async fn test_unknown_page_lists_nothing() {
    let app = TestApp::new().await;
    let site = create_site(app.pool(), "mydomain", None).await.unwrap();

    let response = app
        .get(&format!("/sites/{}/pages/nothing-yet/comments/", site.id), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn test_unknown_site_is_not_found() {
    let app = TestApp::new().await;
    let author = create_regular_user(&app, "Test User").await;

    let response = app.get("/sites/5/pages/testpage/comments/", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .post_json(
            "/sites/5/pages/testpage/comments/",
            Some(&author.token),
            json!({ "text": "Hello" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_posting_requires_session() {
    let app = TestApp::new().await;
    let site = create_site(app.pool(), "mydomain", None).await.unwrap();

    let response = app
        .post_json(
            &format!("/sites/{}/pages/testpage/comments/", site.id),
            None,
            json!({ "text": "Hello" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_comments_rejected() {
    let app = TestApp::new().await;
    let author = create_regular_user(&app, "Test User").await;
    let site = create_site(app.pool(), "mydomain", None).await.unwrap();

    let other_page = app
        .post_json(
            &format!("/sites/{}/pages/other/comments/", site.id),
            Some(&author.token),
            json!({ "text": "Elsewhere" }),
        )
        .await
        .json();

    let uri = format!("/sites/{}/pages/testpage/comments/", site.id);
    let blank = app
        .post_json(&uri, Some(&author.token), json!({ "text": "   " }))
        .await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);

    let foreign_parent = app
        .post_json(
            &uri,
            Some(&author.token),
            json!({ "text": "Reply", "parent": other_page["id"] }),
        )
        .await;
    assert_eq!(foreign_parent.status, StatusCode::BAD_REQUEST);
    assert_eq!(foreign_parent.json()["kind"], "validation");

    let listed = app.get(&uri, None).await.json();
    assert_eq!(listed, json!([]));
    assert_eq!(get_page(app.pool(), site.id, "testpage").await.unwrap(), None);
}

#[tokio::test]
async fn test_rejected_reply_creates_no_page() {
    let app = TestApp::new().await;
    let author = create_regular_user(&app, "Test User").await;
    let site = create_site(app.pool(), "mydomain", None).await.unwrap();

    let response = app
        .post_json(
            &format!("/sites/{}/pages/ghost/comments/", site.id),
            Some(&author.token),
            json!({ "text": "Reply", "parent": 999 }),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(get_page(app.pool(), site.id, "ghost").await.unwrap(), None);
    let pages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pages")
        .fetch_one(app.pool())
        .await
        .unwrap();
    assert_eq!(pages, 0);
}

#[tokio::test]
async fn test_reply_to_missing_parent_on_existing_page() {
    let app = TestApp::new().await;
    let author = create_regular_user(&app, "Test User").await;
    let site = create_site(app.pool(), "mydomain", None).await.unwrap();
    let uri = format!("/sites/{}/pages/testpage/comments/", site.id);

    app.post_json(&uri, Some(&author.token), json!({ "text": "First" }))
        .await;
    let response = app
        .post_json(&uri, Some(&author.token), json!({ "text": "Reply", "parent": 999 }))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get(&uri, None).await.json().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors() {
    let app = TestApp::new().await;
    let author = create_regular_user(&app, "Test User").await;
    let site = create_site(app.pool(), "mydomain", None).await.unwrap();
    let uri = format!("/sites/{}/pages/testpage/comments/", site.id);

    let missing_text = app.post_json(&uri, Some(&author.token), json!({})).await;
    assert_eq!(missing_text.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(missing_text.json()["kind"], "invalid_body");
    assert_eq!(missing_text.json()["status"], 422);

    let broken = app.post_raw(&uri, Some(&author.token), "{ not json").await;
    assert_eq!(broken.status, StatusCode::BAD_REQUEST);
    assert_eq!(broken.json()["kind"], "invalid_body");

    assert_eq!(get_page(app.pool(), site.id, "testpage").await.unwrap(), None);
}
