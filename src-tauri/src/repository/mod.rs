//! Repository Layer
//!
//! The local preference store: four independent collections, each
//! serialized wholesale to a fixed key in one on-device SQLite database.

mod comment_repo;
mod db;
mod like_repo;
mod rating_repo;
mod traits;
mod watchlist_repo;

#[cfg(test)]
mod tests;

pub use comment_repo::CommentRepository;
pub use db::{init_db, StoreHandle};
pub use like_repo::LikeRepository;
pub use rating_repo::RatingRepository;
pub use traits::Repository;
pub use watchlist_repo::WatchlistRepository;
