//! Corkboard application composition root
//!
//! Composes all domain routers into a single application.

use axum::Router;
use corkboard_accounts::{AccountsRepositories, AccountsState};
use corkboard_auth::{AuthBackend, AuthConfig};
use corkboard_board::{BoardRepositories, BoardState};
use corkboard_common::Config;
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
    };

    let accounts_state = AccountsState {
        repos: AccountsRepositories::new(pool.clone()),
        auth: AuthBackend::new(pool.clone(), auth_config.clone()),
    };

    let board_state = BoardState {
        repos: BoardRepositories::new(pool.clone()),
        auth: AuthBackend::new(pool, auth_config),
    };

    // Build router — compose domain routers with shared infrastructure routes
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Corkboard API v0.1.0" }))
        .merge(corkboard_accounts::routes().with_state(accounts_state))
        .merge(corkboard_board::routes().with_state(board_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
