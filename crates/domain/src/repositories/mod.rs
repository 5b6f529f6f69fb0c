pub mod user_repository;
pub mod watchlist_repository;

pub use user_repository::UserRepository;
pub use watchlist_repository::WatchlistRepository;
