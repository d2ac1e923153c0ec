//! Comment scenario tests
//!
//! Require `TEST_DATABASE_URL`; run with `cargo test -- --ignored`.

use axum::http::{Method, StatusCode};
use serde_json::json;
use serial_test::serial;

use crate::common::{assert_error_message, send, TestApp};

async fn create_post(app: &TestApp, token: &str, title: &str) -> i64 {
    let (status, _) = send(
        app.router(),
        Method::POST,
        "/api/posts",
        Some(token),
        Some(json!({"title": title, "content": "body"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(app.router(), Method::GET, "/api/posts", None, None).await;
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["title"] == title)
        .expect("created post should appear in listing")["id"]
        .as_i64()
        .unwrap()
}

#[tokio::test]
#[ignore] // Requires a migrated Postgres test database
#[serial]
async fn test_comment_on_missing_post() {
    let app = TestApp::new().await.unwrap();
    let account = app.create_account("pass1").await.unwrap();
    let token = app.token_for(account.id);

    let (status, body) = send(
        app.router(),
        Method::POST,
        &format!("/api/comments/{}", i64::MAX),
        Some(&token),
        Some(json!({"comment": "hello"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_message(&body, "Post not found");
}

#[tokio::test]
#[ignore] // Requires a migrated Postgres test database
#[serial]
async fn test_empty_comment_rejected() {
    let app = TestApp::new().await.unwrap();
    let account = app.create_account("pass1").await.unwrap();
    let token = app.token_for(account.id);

    let post_id = create_post(&app, &token, &format!("commentable-{}", account.id)).await;

    let (status, body) = send(
        app.router(),
        Method::POST,
        &format!("/api/comments/{}", post_id),
        Some(&token),
        Some(json!({"comment": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_message(&body, "Please enter the comment content");
}

#[tokio::test]
#[ignore] // Requires a migrated Postgres test database
#[serial]
async fn test_edit_resolves_ownership_before_content() {
    let app = TestApp::new().await.unwrap();
    let poster = app.create_account("pass1").await.unwrap();
    let outsider = app.create_account("pass1").await.unwrap();
    let poster_token = app.token_for(poster.id);
    let outsider_token = app.token_for(outsider.id);

    let post_id = create_post(&app, &poster_token, &format!("guarded-{}", poster.id)).await;

    let (status, _) = send(
        app.router(),
        Method::POST,
        &format!("/api/comments/{}", post_id),
        Some(&poster_token),
        Some(json!({"comment": "original"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(
        app.router(),
        Method::GET,
        &format!("/api/comments/{}", post_id),
        None,
        None,
    )
    .await;
    let comment_id = body["data"][0]["id"].as_i64().unwrap();

    // A non-owner sending empty text still sees the ownership 404, not a
    // content 400
    let (status, body) = send(
        app.router(),
        Method::PUT,
        &format!("/api/comments/{}", comment_id),
        Some(&outsider_token),
        Some(json!({"comment": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_message(&body, "Comment not found or this is not your comment");

    // Same for a comment that does not exist at all
    let (status, body) = send(
        app.router(),
        Method::PUT,
        &format!("/api/comments/{}", i64::MAX),
        Some(&outsider_token),
        Some(json!({"comment": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_message(&body, "Comment not found or this is not your comment");

    // The owner with empty text gets the content rejection
    let (status, body) = send(
        app.router(),
        Method::PUT,
        &format!("/api/comments/{}", comment_id),
        Some(&poster_token),
        Some(json!({"comment": ""})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_message(&body, "Please enter the comment content");

    // And the comment text is untouched
    let (_, body) = send(
        app.router(),
        Method::GET,
        &format!("/api/comments/{}", post_id),
        None,
        None,
    )
    .await;
    assert_eq!(body["data"][0]["content"], "original");
}

#[tokio::test]
#[ignore] // Requires a migrated Postgres test database
#[serial]
async fn test_anyone_may_comment_but_only_owner_mutates() {
    let app = TestApp::new().await.unwrap();
    let poster = app.create_account("pass1").await.unwrap();
    let commenter = app.create_account("pass1").await.unwrap();
    let poster_token = app.token_for(poster.id);
    let commenter_token = app.token_for(commenter.id);

    let post_id = create_post(&app, &poster_token, &format!("discussed-{}", poster.id)).await;

    // Commenting on someone else's post is allowed
    let (status, body) = send(
        app.router(),
        Method::POST,
        &format!("/api/comments/{}", post_id),
        Some(&commenter_token),
        Some(json!({"comment": "first"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "You have written a comment");

    let (_, body) = send(
        app.router(),
        Method::GET,
        &format!("/api/comments/{}", post_id),
        None,
        None,
    )
    .await;
    let comment_id = body["data"][0]["id"].as_i64().unwrap();
    assert_eq!(body["data"][0]["nickname"], json!(commenter.nickname));

    // The post owner does not own the comment
    let (status, body) = send(
        app.router(),
        Method::DELETE,
        &format!("/api/comments/{}", comment_id),
        Some(&poster_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_message(&body, "Comment not found or this is not your comment");

    // The commenter can edit and delete it
    let (status, _) = send(
        app.router(),
        Method::PUT,
        &format!("/api/comments/{}", comment_id),
        Some(&commenter_token),
        Some(json!({"comment": "edited"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        app.router(),
        Method::DELETE,
        &format!("/api/comments/{}", comment_id),
        Some(&commenter_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore] // Requires a migrated Postgres test database
#[serial]
async fn test_comment_listing_newest_first() {
    let app = TestApp::new().await.unwrap();
    let account = app.create_account("pass1").await.unwrap();
    let token = app.token_for(account.id);

    let post_id = create_post(&app, &token, &format!("threaded-{}", account.id)).await;

    for i in 0..3 {
        let (status, _) = send(
            app.router(),
            Method::POST,
            &format!("/api/comments/{}", post_id),
            Some(&token),
            Some(json!({"comment": format!("comment {}", i)})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(
        app.router(),
        Method::GET,
        &format!("/api/comments/{}", post_id),
        None,
        None,
    )
    .await;

    let created: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["created_at"].as_str().unwrap())
        .collect();
    let mut sorted = created.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(created, sorted, "comments must be ordered newest first");
}
