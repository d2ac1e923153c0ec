//! Domain entities for the accounts domain

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Account entity.
///
/// `password` holds the stored secret as given at registration; comparison
/// goes through `corkboard_common::secret` only. The field is skipped on
/// serialization so it can never leak into a response body.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub nickname: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
