//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod author_repo;
pub mod book_repo;
pub mod episode_page_repo;
pub mod episode_repo;
pub mod image_repo;
pub mod ranking_repo;

pub use author_repo::AuthorRepo;
pub use book_repo::BookRepo;
pub use episode_page_repo::EpisodePageRepo;
pub use episode_repo::EpisodeRepo;
pub use image_repo::ImageRepo;
pub use ranking_repo::RankingRepo;
