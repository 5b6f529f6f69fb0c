use crate::entities::{StockEntry, Watchlist, WatchlistType};
use crate::errors::DomainError;
use crate::repositories::{UserRepository, WatchlistRepository};
use std::sync::Arc;

/// Watchlist Service - create lists and mutate their stocks, persisting only
/// actual changes
pub struct WatchlistService {
    watchlist_repository: Arc<dyn WatchlistRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl WatchlistService {
    pub fn new(
        watchlist_repository: Arc<dyn WatchlistRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            watchlist_repository,
            user_repository,
        }
    }

    /// Create an empty watchlist; a user holds at most one list per type
    pub async fn create_watchlist(
        &self,
        name: String,
        user_id: i32,
        watchlist_type: WatchlistType,
    ) -> Result<Watchlist, DomainError> {
        if self.user_repository.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::UserNotFound(user_id));
        }

        if self
            .watchlist_repository
            .find_by_user_and_type(user_id, watchlist_type)
            .await?
            .is_some()
        {
            return Err(DomainError::WatchlistAlreadyExists {
                user_id,
                watchlist_type: watchlist_type.to_string(),
            });
        }

        let watchlist = Watchlist::new(name, user_id, watchlist_type);
        watchlist.validate()?;

        let saved = self.watchlist_repository.save(&watchlist).await?;
        tracing::info!(
            watchlist_id = ?saved.id,
            user_id,
            watchlist_type = %watchlist_type,
            "created watchlist"
        );
        Ok(saved)
    }

    pub async fn get_watchlist(&self, id: i32) -> Result<Watchlist, DomainError> {
        self.watchlist_repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::WatchlistNotFound(id))
    }

    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Watchlist>, DomainError> {
        self.watchlist_repository.find_by_user(user_id).await
    }

    /// Add a stock if its symbol is not already in the list
    pub async fn add_stock(&self, id: i32, entry: StockEntry) -> Result<Watchlist, DomainError> {
        let mut watchlist = self.get_watchlist(id).await?;
        let before = watchlist.stocks.len();

        watchlist.add_stock(entry)?;

        if watchlist.stocks.len() == before {
            tracing::debug!(watchlist_id = id, "symbol already present, nothing to persist");
            return Ok(watchlist);
        }

        self.watchlist_repository.update(&watchlist).await
    }

    pub async fn remove_stock(&self, id: i32, symbol: &str) -> Result<Watchlist, DomainError> {
        let mut watchlist = self.get_watchlist(id).await?;

        if !watchlist.remove_stock(symbol) {
            return Ok(watchlist);
        }

        tracing::info!(watchlist_id = id, symbol, "removed stock");
        self.watchlist_repository.update(&watchlist).await
    }
}
