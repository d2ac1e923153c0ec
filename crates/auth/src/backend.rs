//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns auth-specific SQL queries.
//! Uses runtime `sqlx::query_as` (not macros) so domain crates stay
//! decoupled from the accounts schema at compile time.

use sqlx::PgPool;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::types::AuthIdentity;

/// Concrete authentication backend.
///
/// Wraps a database pool and auth configuration. Provides token issuing
/// plus account lookup for credential verification.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    config: AuthConfig,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: AuthConfig) -> Self {
        Self { pool, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Issue a session token for an account (used by the login handler).
    pub fn issue_token(&self, account_id: i64) -> Result<String, AuthError> {
        crate::jwt::issue_session_token(account_id, &self.config)
    }

    /// Find account identity by ID (read model — excludes the stored secret)
    pub(crate) async fn find_account(&self, id: i64) -> Result<Option<AuthIdentity>, AuthError> {
        let account: Option<AuthIdentity> = sqlx::query_as(
            r#"
            SELECT id, nickname, created_at, updated_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, account_id = %id, "Failed to load account");
            AuthError::AccountLoadError
        })?;

        Ok(account)
    }

    /// Shared token authentication logic used by the `AuthUser` extractor.
    ///
    /// A signature-valid token whose account no longer exists is rejected
    /// outright rather than forwarding an absent account downstream.
    pub(crate) async fn authenticate(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = crate::jwt::validate_session_token(token, &self.config)?;

        let account_id: i64 = claims.sub.parse().map_err(|_| AuthError::InvalidAccountId)?;

        let account = self
            .find_account(account_id)
            .await?
            .ok_or(AuthError::AccountNotFound)?;

        Ok(AuthContext::new(account))
    }
}
