//! Route definitions for the accounts domain API

use axum::{routing::post, Router};

use super::handlers::accounts;
use super::middleware::AccountsState;

/// Create all accounts domain API routes
pub fn routes() -> Router<AccountsState> {
    Router::new()
        .route("/api/signup", post(accounts::signup))
        .route("/api/login", post(accounts::login))
}
