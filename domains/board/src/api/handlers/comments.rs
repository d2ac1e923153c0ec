//! Comment API handlers
//!
//! - POST /api/comments/{post_id} - Comment on a post
//! - GET /api/comments/{post_id} - List comments for a post, newest first
//! - PUT /api/comments/{comment_id} - Edit an owned comment
//! - DELETE /api/comments/{comment_id} - Remove an owned comment

use axum::{
    extract::{Path, State},
    Json,
};
use corkboard_auth::AuthUser;
use corkboard_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::BoardState;
use crate::domain::entities::{validate_comment_content, CommentListing};

/// Request for creating or editing a comment
#[derive(Debug, Deserialize, Validate)]
pub struct CommentRequest {
    pub comment: String,
}

/// Envelope for listing responses
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub data: Vec<CommentListing>,
}

/// Envelope for mutation acknowledgements
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /api/comments/{post_id} - Comment on a post
///
/// Any authenticated account may comment on any existing post; ownership of
/// the parent post is irrelevant.
pub async fn create_comment(
    AuthUser(ctx): AuthUser,
    State(state): State<BoardState>,
    Path(post_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> Result<Json<MessageResponse>> {
    if !state.repos.posts.exists(post_id).await? {
        return Err(Error::NotFound("Post not found".to_string()));
    }

    validate_comment_content(&request.comment)?;

    state
        .repos
        .comments
        .create(post_id, ctx.account_id(), &request.comment)
        .await?;

    Ok(Json(MessageResponse {
        message: "You have written a comment",
    }))
}

/// GET /api/comments/{post_id} - List comments for a post
pub async fn list_comments(
    State(state): State<BoardState>,
    Path(post_id): Path<i64>,
) -> Result<Json<CommentListResponse>> {
    if !state.repos.posts.exists(post_id).await? {
        return Err(Error::NotFound("Post not found".to_string()));
    }

    let data = state.repos.comments.list_by_post(post_id).await?;
    Ok(Json(CommentListResponse { data }))
}

/// PUT /api/comments/{comment_id} - Edit an owned comment
///
/// Ownership is resolved before the content is inspected, so a non-owner
/// learns nothing from the shape of the body they send.
pub async fn update_comment(
    AuthUser(ctx): AuthUser,
    State(state): State<BoardState>,
    Path(comment_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> Result<Json<MessageResponse>> {
    if !state
        .repos
        .comments
        .is_owned(comment_id, ctx.account_id())
        .await?
    {
        return Err(Error::NotFound(
            "Comment not found or this is not your comment".to_string(),
        ));
    }

    validate_comment_content(&request.comment)?;

    let updated = state
        .repos
        .comments
        .update_owned(comment_id, ctx.account_id(), &request.comment)
        .await?;

    if !updated {
        return Err(Error::NotFound(
            "Comment not found or this is not your comment".to_string(),
        ));
    }

    Ok(Json(MessageResponse {
        message: "Your comment has been edited.",
    }))
}

/// DELETE /api/comments/{comment_id} - Remove an owned comment
pub async fn delete_comment(
    AuthUser(ctx): AuthUser,
    State(state): State<BoardState>,
    Path(comment_id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    let deleted = state
        .repos
        .comments
        .delete_owned(comment_id, ctx.account_id())
        .await?;

    if !deleted {
        return Err(Error::NotFound(
            "Comment not found or this is not your comment".to_string(),
        ));
    }

    Ok(Json(MessageResponse {
        message: "Your comment has been removed.",
    }))
}
