//! Account repository

use crate::domain::entities::Account;
use corkboard_common::{RepositoryError, Result};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Get account by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, nickname, password, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Find account by nickname
    pub async fn find_by_nickname(&self, nickname: &str) -> Result<Option<Account>> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, nickname, password, created_at, updated_at
            FROM accounts
            WHERE nickname = $1
            "#,
        )
        .bind(nickname)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    /// Create a new account.
    ///
    /// The unique constraint on `nickname` is the authoritative duplicate
    /// check; a losing concurrent registration surfaces as `AlreadyExists`.
    pub async fn create(&self, nickname: &str, password: &str) -> Result<Account> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (nickname, password, created_at, updated_at)
            VALUES ($1, $2, NOW(), NOW())
            RETURNING id, nickname, password, created_at, updated_at
            "#,
        )
        .bind(nickname)
        .bind(password)
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(account)
    }
}
