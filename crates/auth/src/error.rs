//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug)]
pub enum AuthError {
    MissingCredential,
    InvalidCredentialFormat,
    InvalidToken,
    InvalidAccountId,
    AccountNotFound,
    AccountLoadError,
    AlreadyAuthenticated,
    TokenCreation,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::MissingCredential => (
                StatusCode::UNAUTHORIZED,
                "MISSING_CREDENTIAL",
                "Login is required",
            ),
            AuthError::InvalidCredentialFormat => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIAL_FORMAT",
                "Login is required",
            ),
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "You are not logged in",
            ),
            AuthError::InvalidAccountId => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "You are not logged in",
            ),
            AuthError::AccountNotFound => (
                StatusCode::UNAUTHORIZED,
                "ACCOUNT_NOT_FOUND",
                "You are not logged in",
            ),
            AuthError::AccountLoadError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "ACCOUNT_LOAD_ERROR",
                "Failed to load account",
            ),
            AuthError::AlreadyAuthenticated => (
                StatusCode::BAD_REQUEST,
                "ALREADY_AUTHENTICATED",
                "You are already logged in",
            ),
            AuthError::TokenCreation => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_CREATION_ERROR",
                "Failed to issue session token",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
