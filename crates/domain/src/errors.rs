use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Stock entry is missing a symbol")]
    MissingSymbol,

    #[error("Invalid watchlist type: {0}")]
    InvalidWatchlistType(String),

    #[error("User not found with id: {0}")]
    UserNotFound(i32),

    #[error("Watchlist not found with id: {0}")]
    WatchlistNotFound(i32),

    #[error("Email already exists: {0}")]
    EmailAlreadyExists(String),

    #[error("User {user_id} already has a {watchlist_type} watchlist")]
    WatchlistAlreadyExists {
        user_id: i32,
        watchlist_type: String,
    },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}
