//! Auth read-model types
//!
//! Lightweight view of the account row owned by the accounts domain. The
//! stored secret is deliberately excluded; nothing downstream of the gate
//! ever sees it.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Lightweight identity for authenticated accounts.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AuthIdentity {
    pub id: i64,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
