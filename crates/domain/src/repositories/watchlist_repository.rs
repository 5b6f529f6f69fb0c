use crate::entities::{Watchlist, WatchlistType};
use crate::errors::DomainError;
use async_trait::async_trait;

/// Every method is durable once it returns; a later lookup in the same run
/// observes the write.
#[async_trait]
pub trait WatchlistRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Watchlist>, DomainError>;
    async fn find_by_user_and_type(
        &self,
        user_id: i32,
        watchlist_type: WatchlistType,
    ) -> Result<Option<Watchlist>, DomainError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Watchlist>, DomainError>;
    async fn save(&self, watchlist: &Watchlist) -> Result<Watchlist, DomainError>;
    /// Persists the stock sequence and `updated_at` of an existing watchlist.
    async fn update(&self, watchlist: &Watchlist) -> Result<Watchlist, DomainError>;
}
