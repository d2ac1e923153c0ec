//! Domain layer for the accounts domain

pub mod entities;
pub mod validation;
