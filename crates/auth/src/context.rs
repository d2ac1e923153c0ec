//! Authorization context for authenticated requests

use crate::types::AuthIdentity;

/// Represents an authenticated account context
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub account: AuthIdentity,
}

impl AuthContext {
    /// Create a new auth context for an account
    pub fn new(account: AuthIdentity) -> Self {
        Self { account }
    }

    /// The authenticated account's identifier
    pub fn account_id(&self) -> i64 {
        self.account.id
    }
}
