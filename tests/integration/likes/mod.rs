//! Like toggle scenario tests
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

async fn like_row_count(app: &TestApp, post_id: i64, account_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM likes WHERE post_id = $1 AND account_id = $2",
    )
    .bind(post_id)
    .bind(account_id)
    .fetch_one(&app.pool)
    .await
    .unwrap()
}

#[tokio::test]
#[ignore] // Requires a migrated Postgres test database
#[serial]
async fn test_toggle_is_an_involution() {
    let app = TestApp::new().await.unwrap();
    let account = app.create_account("pass1").await.unwrap();
    let token = app.token_for(account.id);

    let post_id = create_post(&app, &token, &format!("likeable-{}", account.id)).await;
    let uri = format!("/api/posts/{}/like", post_id);

    // First toggle reaches Liked and the like count rises by one
    let (status, body) = send(app.router(), Method::PUT, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "liked");
    assert_eq!(body["message"], "You have liked this post.");
    assert_eq!(like_row_count(&app, post_id, account.id).await, 1);

    let (_, body) = send(
        app.router(),
        Method::GET,
        &format!("/api/posts/{}", post_id),
        None,
        None,
    )
    .await;
    assert_eq!(body["data"]["likes"], 1);

    // Second toggle returns to Unliked
    let (status, body) = send(app.router(), Method::PUT, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "unliked");
    assert_eq!(body["message"], "You have unliked this post.");
    assert_eq!(like_row_count(&app, post_id, account.id).await, 0);
}

#[tokio::test]
#[ignore] // Requires a migrated Postgres test database
#[serial]
async fn test_toggle_on_missing_post() {
    let app = TestApp::new().await.unwrap();
    let account = app.create_account("pass1").await.unwrap();
    let token = app.token_for(account.id);

    let (status, body) = send(
        app.router(),
        Method::PUT,
        &format!("/api/posts/{}/like", i64::MAX),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_message(&body, "Post not found");
}

#[tokio::test]
#[ignore] // Requires a migrated Postgres test database
#[serial]
async fn test_concurrent_toggles_never_duplicate() {
    let app = TestApp::new().await.unwrap();
    let account = app.create_account("pass1").await.unwrap();
    let token = app.token_for(account.id);

    let post_id = create_post(&app, &token, &format!("contended-{}", account.id)).await;

    let repo = corkboard_board::LikeRepository::new(app.pool.clone());

    let mut handles = Vec::new();
    for _ in 0..8 {
        let repo = repo.clone();
        handles.push(tokio::spawn(
            async move { repo.toggle(post_id, account.id).await },
        ));
    }

    for handle in handles {
        handle.await.unwrap().expect("toggle must not fail under contention");
    }

    // At most one row exists for the pair, whatever interleaving occurred
    let rows = like_row_count(&app, post_id, account.id).await;
    assert!(rows <= 1, "like row invariant violated: {} rows", rows);

    // And the final state is consistent with what one more toggle reports
    let (_, body) = send(
        app.router(),
        Method::PUT,
        &format!("/api/posts/{}/like", post_id),
        Some(&token),
        None,
    )
    .await;
    let expected = if rows == 1 { 0 } else { 1 };
    assert_eq!(like_row_count(&app, post_id, account.id).await, expected);
    assert!(body["result"] == "liked" || body["result"] == "unliked");
}

#[tokio::test]
#[ignore] // Requires a migrated Postgres test database
#[serial]
async fn test_liked_posts_listing() {
    let app = TestApp::new().await.unwrap();
    let poster = app.create_account("pass1").await.unwrap();
    let liker = app.create_account("pass1").await.unwrap();
    let poster_token = app.token_for(poster.id);
    let liker_token = app.token_for(liker.id);

    let liked_id = create_post(&app, &poster_token, &format!("liked-{}", poster.id)).await;
    let ignored_id = create_post(&app, &poster_token, &format!("ignored-{}", poster.id)).await;

    let (status, _) = send(
        app.router(),
        Method::PUT,
        &format!("/api/posts/{}/like", liked_id),
        Some(&liker_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app.router(),
        Method::GET,
        "/api/posts-like",
        Some(&liker_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&liked_id));
    assert!(!ids.contains(&ignored_id));

    let liked = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["id"].as_i64() == Some(liked_id))
        .unwrap();
    assert_eq!(liked["likes"], 1);
    assert_eq!(liked["nickname"], json!(poster.nickname));
}
