//! Comment repository

use crate::domain::entities::{Comment, CommentListing};
use corkboard_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new comment
    pub async fn create(&self, post_id: i64, account_id: i64, content: &str) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (post_id, account_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, post_id, account_id, content, created_at, updated_at
            "#,
        )
        .bind(post_id)
        .bind(account_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    /// List comments for a post with commenter nickname, newest first
    pub async fn list_by_post(&self, post_id: i64) -> Result<Vec<CommentListing>> {
        let comments = sqlx::query_as::<_, CommentListing>(
            r#"
            SELECT c.id, c.post_id, c.account_id, a.nickname, c.content,
                   c.created_at, c.updated_at
            FROM comments c
            JOIN accounts a ON a.id = c.account_id
            WHERE c.post_id = $1
            ORDER BY c.created_at DESC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    /// Check whether a comment exists and is owned by the account
    pub async fn is_owned(&self, comment_id: i64, account_id: i64) -> Result<bool> {
        let owned = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1 AND account_id = $2)",
        )
        .bind(comment_id)
        .bind(account_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(owned)
    }

    /// Update a comment if it exists and is owned by the account
    pub async fn update_owned(
        &self,
        comment_id: i64,
        account_id: i64,
        content: &str,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE comments
            SET content = $3, updated_at = NOW()
            WHERE id = $1 AND account_id = $2
            "#,
        )
        .bind(comment_id)
        .bind(account_id)
        .bind(content)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a comment if it exists and is owned by the account
    pub async fn delete_owned(&self, comment_id: i64, account_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND account_id = $2")
            .bind(comment_id)
            .bind(account_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
