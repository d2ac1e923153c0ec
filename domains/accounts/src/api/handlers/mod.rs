//! API handlers for the accounts domain

pub mod accounts;
