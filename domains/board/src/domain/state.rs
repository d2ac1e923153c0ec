//! Like state machine
//!
//! Every `(account, post)` pair is in exactly one of two states. Presence
//! of a row in the `likes` table means `Liked`; absence means `Unliked`.
//! No other states exist.

use serde::{Deserialize, Serialize};

/// Like state for an `(account, post)` pair.
///
/// The initial state for every pair is `Unliked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LikeState {
    Liked,
    #[default]
    Unliked,
}

impl LikeState {
    /// Flip the state. Toggling returns the state reached, not the state
    /// left.
    pub fn toggle(self) -> Self {
        match self {
            Self::Liked => Self::Unliked,
            Self::Unliked => Self::Liked,
        }
    }

    pub fn is_liked(&self) -> bool {
        matches!(self, Self::Liked)
    }
}

impl std::fmt::Display for LikeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Liked => write!(f, "liked"),
            Self::Unliked => write!(f, "unliked"),
        }
    }
}
