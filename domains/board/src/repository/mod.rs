//! Repository implementations for the board domain

pub mod comments;
pub mod likes;
pub mod posts;

use sqlx::PgPool;

pub use comments::CommentRepository;
pub use likes::LikeRepository;
pub use posts::PostRepository;

/// Combined repository access for the board domain
#[derive(Clone)]
pub struct BoardRepositories {
    pub posts: PostRepository,
    pub comments: CommentRepository,
    pub likes: LikeRepository,
}

impl BoardRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            posts: PostRepository::new(pool.clone()),
            comments: CommentRepository::new(pool.clone()),
            likes: LikeRepository::new(pool),
        }
    }
}
