//! Session token claims types

use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
///
/// The token binds exactly the account identifier; no expiry claim is
/// issued, so tokens remain valid until the signing secret changes.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (account ID, decimal)
    pub sub: String,
    /// Issued at
    pub iat: u64,
}
