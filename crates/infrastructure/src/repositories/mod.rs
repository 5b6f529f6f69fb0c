pub mod sqlite_user_repository;
pub mod sqlite_watchlist_repository;

pub use sqlite_user_repository::SqliteUserRepository;
pub use sqlite_watchlist_repository::SqliteWatchlistRepository;
