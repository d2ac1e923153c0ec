//! Like toggle API handlers
//!
//! - PUT /api/posts/{post_id}/like - Flip the caller's like on a post
//! - GET /api/posts-like - List posts the caller has liked

use axum::{
    extract::{Path, State},
    Json,
};
use corkboard_auth::AuthUser;
use corkboard_common::{Error, Result};
use serde::Serialize;

use crate::api::middleware::BoardState;
use crate::domain::entities::PostListing;
use crate::domain::state::LikeState;

/// Response for the toggle: the state reached, not the state left
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub result: LikeState,
    pub message: &'static str,
}

/// Envelope for liked-post listings
#[derive(Debug, Serialize)]
pub struct LikedPostsResponse {
    pub data: Vec<PostListing>,
}

/// PUT /api/posts/{post_id}/like - Flip the caller's like on a post
///
/// Any authenticated account may toggle its own like on any existing post;
/// no ownership check applies.
pub async fn toggle_like(
    AuthUser(ctx): AuthUser,
    State(state): State<BoardState>,
    Path(post_id): Path<i64>,
) -> Result<Json<ToggleResponse>> {
    if !state.repos.posts.exists(post_id).await? {
        return Err(Error::NotFound("Post not found".to_string()));
    }

    let result = state.repos.likes.toggle(post_id, ctx.account_id()).await?;

    let message = match result {
        LikeState::Liked => "You have liked this post.",
        LikeState::Unliked => "You have unliked this post.",
    };

    Ok(Json(ToggleResponse { result, message }))
}

/// GET /api/posts-like - List posts the caller has liked
pub async fn list_liked_posts(
    AuthUser(ctx): AuthUser,
    State(state): State<BoardState>,
) -> Result<Json<LikedPostsResponse>> {
    let data = state.repos.posts.list_liked_by(ctx.account_id()).await?;
    Ok(Json(LikedPostsResponse { data }))
}
