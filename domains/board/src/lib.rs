//! Board domain: posts, comments, and the like toggle

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Comment, CommentListing, Post, PostDetail, PostListing};
pub use domain::state::LikeState;

// Re-export repository types
pub use repository::{BoardRepositories, CommentRepository, LikeRepository, PostRepository};

// Re-export API types
pub use api::routes;
pub use api::BoardState;
