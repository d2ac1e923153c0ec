//! Post repository
//!
//! Mutations are combined existence-and-ownership statements: the WHERE
//! clause filters by both id and owner, so "doesn't exist" and "not yours"
//! are indistinguishable to callers.

use crate::domain::entities::{Post, PostDetail, PostListing};
use corkboard_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new post
    pub async fn create(&self, account_id: i64, title: &str, content: &str) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (account_id, title, content, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            RETURNING id, account_id, title, content, created_at, updated_at
            "#,
        )
        .bind(account_id)
        .bind(title)
        .bind(content)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// List all posts with owner nickname and like count, newest first
    pub async fn list(&self) -> Result<Vec<PostListing>> {
        let posts = sqlx::query_as::<_, PostListing>(
            r#"
            SELECT p.id, p.account_id, a.nickname, p.title,
                   p.created_at, p.updated_at,
                   COUNT(l.account_id) AS likes
            FROM posts p
            JOIN accounts a ON a.id = p.account_id
            LEFT JOIN likes l ON l.post_id = p.id
            GROUP BY p.id, a.nickname
            ORDER BY p.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Get a single post with body, owner nickname, and like count
    pub async fn find_detail(&self, post_id: i64) -> Result<Option<PostDetail>> {
        let post = sqlx::query_as::<_, PostDetail>(
            r#"
            SELECT p.id, p.account_id, a.nickname, p.title, p.content,
                   p.created_at, p.updated_at,
                   COUNT(l.account_id) AS likes
            FROM posts p
            JOIN accounts a ON a.id = p.account_id
            LEFT JOIN likes l ON l.post_id = p.id
            WHERE p.id = $1
            GROUP BY p.id, a.nickname
            "#,
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// Check whether a post exists
    pub async fn exists(&self, post_id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)",
        )
        .bind(post_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Update a post if it exists and is owned by the account.
    ///
    /// Returns false when no matching row exists, whether because the id is
    /// unknown or because it belongs to someone else.
    pub async fn update_owned(
        &self,
        post_id: i64,
        account_id: i64,
        title: &str,
        content: &str,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = $3, content = $4, updated_at = NOW()
            WHERE id = $1 AND account_id = $2
            "#,
        )
        .bind(post_id)
        .bind(account_id)
        .bind(title)
        .bind(content)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a post if it exists and is owned by the account.
    ///
    /// Comments and likes on the post cascade at the schema level.
    pub async fn delete_owned(&self, post_id: i64, account_id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1 AND account_id = $2")
            .bind(post_id)
            .bind(account_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List posts the account has liked, shaped like the post listing.
    ///
    /// No ordering is guaranteed over this result set.
    pub async fn list_liked_by(&self, account_id: i64) -> Result<Vec<PostListing>> {
        let posts = sqlx::query_as::<_, PostListing>(
            r#"
            SELECT p.id, p.account_id, a.nickname, p.title,
                   p.created_at, p.updated_at,
                   COUNT(l.account_id) AS likes
            FROM posts p
            JOIN accounts a ON a.id = p.account_id
            JOIN likes mine ON mine.post_id = p.id AND mine.account_id = $1
            LEFT JOIN likes l ON l.post_id = p.id
            GROUP BY p.id, a.nickname
            "#,
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }
}
