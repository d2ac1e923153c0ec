//! API layer for the board domain

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::BoardState;
pub use routes::routes;
