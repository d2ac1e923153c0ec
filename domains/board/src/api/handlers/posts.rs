//! Post API handlers
//!
//! - POST /api/posts - Create a post
//! - GET /api/posts - List posts, newest first
//! - GET /api/posts/{post_id} - Get a post with body
//! - PUT /api/posts/{post_id} - Edit an owned post
//! - DELETE /api/posts/{post_id} - Remove an owned post

use axum::{
    extract::{Path, State},
    Json,
};
use corkboard_auth::AuthUser;
use corkboard_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::BoardState;
use crate::domain::entities::{PostDetail, PostListing};

/// Request for creating or editing a post
#[derive(Debug, Deserialize, Validate)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
}

/// Envelope for listing responses
#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub data: Vec<PostListing>,
}

/// Envelope for detail responses
#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub data: PostDetail,
}

/// Envelope for mutation acknowledgements
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /api/posts - Create a post
pub async fn create_post(
    AuthUser(ctx): AuthUser,
    State(state): State<BoardState>,
    ValidatedJson(request): ValidatedJson<PostRequest>,
) -> Result<Json<MessageResponse>> {
    let post = state
        .repos
        .posts
        .create(ctx.account_id(), &request.title, &request.content)
        .await?;

    tracing::info!(post_id = %post.id, account_id = %ctx.account_id(), "Post created");

    Ok(Json(MessageResponse {
        message: "You have successfully posted.",
    }))
}

/// GET /api/posts - List posts with owner nickname and like count
pub async fn list_posts(State(state): State<BoardState>) -> Result<Json<PostListResponse>> {
    let data = state.repos.posts.list().await?;
    Ok(Json(PostListResponse { data }))
}

/// GET /api/posts/{post_id} - Get a single post
pub async fn get_post(
    State(state): State<BoardState>,
    Path(post_id): Path<i64>,
) -> Result<Json<PostDetailResponse>> {
    let data = state
        .repos
        .posts
        .find_detail(post_id)
        .await?
        .ok_or_else(|| Error::NotFound("Post not found".to_string()))?;

    Ok(Json(PostDetailResponse { data }))
}

/// PUT /api/posts/{post_id} - Edit an owned post
///
/// Absence and foreign ownership are reported identically so existence is
/// never disclosed to non-owners.
pub async fn update_post(
    AuthUser(ctx): AuthUser,
    State(state): State<BoardState>,
    Path(post_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<PostRequest>,
) -> Result<Json<MessageResponse>> {
    let updated = state
        .repos
        .posts
        .update_owned(post_id, ctx.account_id(), &request.title, &request.content)
        .await?;

    if !updated {
        return Err(Error::NotFound(
            "Post not found or this is not your post".to_string(),
        ));
    }

    Ok(Json(MessageResponse {
        message: "Your post has been edited.",
    }))
}

/// DELETE /api/posts/{post_id} - Remove an owned post
pub async fn delete_post(
    AuthUser(ctx): AuthUser,
    State(state): State<BoardState>,
    Path(post_id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    let deleted = state
        .repos
        .posts
        .delete_owned(post_id, ctx.account_id())
        .await?;

    if !deleted {
        return Err(Error::NotFound(
            "Post not found or this is not your post".to_string(),
        ));
    }

    tracing::info!(post_id = %post_id, account_id = %ctx.account_id(), "Post removed");

    Ok(Json(MessageResponse {
        message: "Your post has been removed.",
    }))
}
