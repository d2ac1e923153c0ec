//! API endpoint integration tests
//!
//! Router-level tests for the authentication gate run against a lazy pool
//! and need no database. The scenario tests for accounts, posts, comments,
//! and likes are `#[ignore]`d and expect `TEST_DATABASE_URL` to point at a
//! migrated Postgres instance.

#![allow(dead_code)]

mod accounts;
mod auth_gate;
mod comments;
mod common;
mod likes;
mod posts;
