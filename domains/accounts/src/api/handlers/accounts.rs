//! Registration and login API handlers
//!
//! - POST /api/signup - Register a new account
//! - POST /api/login - Exchange credentials for a session token

use axum::{extract::State, http::StatusCode, Json};
use corkboard_auth::Anonymous;
use corkboard_common::{verify_secret, Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::domain::validation::{validate_nickname, validate_password};

/// Request for account registration
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    pub nickname: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
}

/// Request for login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    pub nickname: String,
    pub password: String,
}

/// Response for login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/signup - Register a new account
///
/// Only reachable by anonymous callers; a credential header of any kind
/// rejects the request before the body is examined.
pub async fn signup(
    Anonymous: Anonymous,
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    validate_nickname(&request.nickname)?;
    validate_password(&request.password, &request.nickname)?;

    if request.password != request.confirm_password {
        return Err(Error::Validation(
            "Password is not the same as password checkbox".to_string(),
        ));
    }

    if state
        .repos
        .accounts
        .find_by_nickname(&request.nickname)
        .await?
        .is_some()
    {
        return Err(Error::Conflict("This is a duplicate nickname".to_string()));
    }

    // The unique constraint closes the check-then-create race: a losing
    // concurrent registration comes back as Conflict, not a 500.
    let account = state
        .repos
        .accounts
        .create(&request.nickname, &request.password)
        .await
        .map_err(|e| match e {
            Error::Conflict(_) => Error::Conflict("This is a duplicate nickname".to_string()),
            other => other,
        })?;

    tracing::info!(account_id = %account.id, "Account registered");

    Ok((StatusCode::CREATED, Json(json!({}))))
}

/// POST /api/login - Exchange credentials for a session token
///
/// A missing account and a wrong password are indistinguishable to the
/// caller.
pub async fn login(
    Anonymous: Anonymous,
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let account = state
        .repos
        .accounts
        .find_by_nickname(&request.nickname)
        .await?;

    let account = match account {
        Some(account) if verify_secret(&request.password, &account.password) => account,
        _ => {
            return Err(Error::Authentication(
                "Please check your nickname or password".to_string(),
            ))
        }
    };

    let token = state
        .auth
        .issue_token(account.id)
        .map_err(|_| Error::Internal("Failed to issue session token".to_string()))?;

    Ok(Json(LoginResponse { token }))
}
