//! API handlers for the board domain

pub mod comments;
pub mod likes;
pub mod posts;
