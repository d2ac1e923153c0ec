//! Board domain state and auth backend integration

use crate::BoardRepositories;
use axum::extract::FromRef;
use corkboard_auth::AuthBackend;

/// Application state for the board domain
#[derive(Clone)]
pub struct BoardState {
    pub repos: BoardRepositories,
    pub auth: AuthBackend,
}

impl FromRef<BoardState> for AuthBackend {
    fn from_ref(state: &BoardState) -> Self {
        state.auth.clone()
    }
}
