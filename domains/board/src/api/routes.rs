//! Route definitions for the board domain API

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{comments, likes, posts};
use super::middleware::BoardState;

/// Create post CRUD routes
fn post_routes() -> Router<BoardState> {
    Router::new()
        .route("/api/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/api/posts/{post_id}",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
}

/// Create comment CRUD routes.
///
/// The path parameter is a post id for list/create and a comment id for
/// update/delete, mirroring the wire API.
fn comment_routes() -> Router<BoardState> {
    Router::new().route(
        "/api/comments/{id}",
        get(comments::list_comments)
            .post(comments::create_comment)
            .put(comments::update_comment)
            .delete(comments::delete_comment),
    )
}

/// Create like toggle routes
fn like_routes() -> Router<BoardState> {
    Router::new()
        .route("/api/posts/{post_id}/like", put(likes::toggle_like))
        .route("/api/posts-like", get(likes::list_liked_posts))
}

/// Create all board domain API routes
pub fn routes() -> Router<BoardState> {
    Router::new()
        .merge(post_routes())
        .merge(comment_routes())
        .merge(like_routes())
}
