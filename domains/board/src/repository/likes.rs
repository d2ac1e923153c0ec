//! Like repository
//!
//! The `likes` table has a composite primary key on `(post_id, account_id)`,
//! so at most one row can exist per pair at any observation point. The
//! toggle never does an unguarded check-then-act against it.

use crate::domain::state::LikeState;
use corkboard_common::Result;
use sqlx::PgPool;

#[derive(Clone)]
pub struct LikeRepository {
    pool: PgPool,
}

impl LikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Flip the like state for an `(account, post)` pair and return the
    /// state reached.
    ///
    /// The flip runs as a transaction of two conditional statements:
    /// delete-if-exists, then insert-on-conflict-do-nothing. Two concurrent
    /// toggles starting from `Unliked` race on the insert; the loser's
    /// conflict is absorbed and both observe `Liked`, which is the state the
    /// pair is actually in.
    pub async fn toggle(&self, post_id: i64, account_id: i64) -> Result<LikeState> {
        let mut tx = self.pool.begin().await?;

        let deleted = sqlx::query("DELETE FROM likes WHERE post_id = $1 AND account_id = $2")
            .bind(post_id)
            .bind(account_id)
            .execute(&mut *tx)
            .await?;

        let state = if deleted.rows_affected() > 0 {
            LikeState::Unliked
        } else {
            sqlx::query(
                r#"
                INSERT INTO likes (post_id, account_id, created_at)
                VALUES ($1, $2, NOW())
                ON CONFLICT (post_id, account_id) DO NOTHING
                "#,
            )
            .bind(post_id)
            .bind(account_id)
            .execute(&mut *tx)
            .await?;
            LikeState::Liked
        };

        tx.commit().await?;

        Ok(state)
    }

    /// Current like state for an `(account, post)` pair
    pub async fn state(&self, post_id: i64, account_id: i64) -> Result<LikeState> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM likes WHERE post_id = $1 AND account_id = $2)",
        )
        .bind(post_id)
        .bind(account_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(if exists {
            LikeState::Liked
        } else {
            LikeState::Unliked
        })
    }
}
