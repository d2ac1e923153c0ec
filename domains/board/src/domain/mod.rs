//! Domain layer for the board domain

pub mod entities;
pub mod state;
