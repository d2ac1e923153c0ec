//! Domain entities for the board domain
//!
//! Listing types carry the owner nickname and like count joined in by the
//! repositories; they are read models, not stored rows.

use chrono::{DateTime, Utc};
use corkboard_common::{Error, Result};
use serde::Serialize;

/// Post entity as stored
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub account_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Comment entity as stored
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub account_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Post listing row: post fields plus owner nickname and like count
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PostListing {
    pub id: i64,
    pub account_id: i64,
    pub nickname: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes: i64,
}

/// Post detail row: listing fields plus the body
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PostDetail {
    pub id: i64,
    pub account_id: i64,
    pub nickname: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub likes: i64,
}

/// Comment listing row: comment fields plus commenter nickname
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CommentListing {
    pub id: i64,
    pub post_id: i64,
    pub account_id: i64,
    pub nickname: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validate comment text: creating or editing a comment with empty text is
/// rejected before any persistence runs.
pub fn validate_comment_content(content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(Error::Validation(
            "Please enter the comment content".to_string(),
        ));
    }

    Ok(())
}
