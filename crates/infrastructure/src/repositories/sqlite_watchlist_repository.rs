use crate::database::{watchlists, SqlitePool};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use domain::{DomainError, StockEntry, Watchlist, WatchlistRepository, WatchlistType};

// Database model
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = watchlists)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct WatchlistModel {
    id: i32,
    name: String,
    user_id: i32,
    watchlist_type: String,
    stocks: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = watchlists)]
struct NewWatchlistModel {
    name: String,
    user_id: i32,
    watchlist_type: String,
    stocks: String,
    created_at: NaiveDateTime,
    updated_at: NaiveDateTime,
}

impl TryFrom<WatchlistModel> for Watchlist {
    type Error = DomainError;

    fn try_from(model: WatchlistModel) -> Result<Self, Self::Error> {
        let watchlist_type = model.watchlist_type.parse::<WatchlistType>()?;
        let stocks: Vec<StockEntry> = serde_json::from_str(&model.stocks).map_err(|e| {
            DomainError::RepositoryError(format!(
                "Corrupt stocks column for watchlist {}: {}",
                model.id, e
            ))
        })?;

        Ok(Watchlist {
            id: Some(model.id),
            name: model.name,
            user_id: model.user_id,
            watchlist_type,
            stocks,
            created_at: model.created_at.and_utc(),
            updated_at: model.updated_at.and_utc(),
        })
    }
}

impl TryFrom<&Watchlist> for NewWatchlistModel {
    type Error = DomainError;

    fn try_from(watchlist: &Watchlist) -> Result<Self, Self::Error> {
        Ok(NewWatchlistModel {
            name: watchlist.name.clone(),
            user_id: watchlist.user_id,
            watchlist_type: watchlist.watchlist_type.as_str().to_string(),
            stocks: encode_stocks(&watchlist.stocks)?,
            created_at: watchlist.created_at.naive_utc(),
            updated_at: watchlist.updated_at.naive_utc(),
        })
    }
}

fn encode_stocks(stocks: &[StockEntry]) -> Result<String, DomainError> {
    serde_json::to_string(stocks).map_err(|e| DomainError::RepositoryError(e.to_string()))
}

fn into_watchlists(models: Vec<WatchlistModel>) -> Result<Vec<Watchlist>, DomainError> {
    models.into_iter().map(Watchlist::try_from).collect()
}

pub struct SqliteWatchlistRepository {
    pool: SqlitePool,
}

impl SqliteWatchlistRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WatchlistRepository for SqliteWatchlistRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Watchlist>, DomainError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        let result = tokio::task::spawn_blocking(move || {
            watchlists::table
                .filter(watchlists::id.eq(id))
                .select(WatchlistModel::as_select())
                .first::<WatchlistModel>(&mut conn)
                .optional()
        })
        .await
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        result.map(Watchlist::try_from).transpose()
    }

    async fn find_by_user_and_type(
        &self,
        user_id: i32,
        watchlist_type: WatchlistType,
    ) -> Result<Option<Watchlist>, DomainError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        let type_str = watchlist_type.as_str();
        let result = tokio::task::spawn_blocking(move || {
            watchlists::table
                .filter(watchlists::user_id.eq(user_id))
                .filter(watchlists::watchlist_type.eq(type_str))
                .order(watchlists::id.asc())
                .select(WatchlistModel::as_select())
                .first::<WatchlistModel>(&mut conn)
                .optional()
        })
        .await
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        result.map(Watchlist::try_from).transpose()
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Watchlist>, DomainError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        let result = tokio::task::spawn_blocking(move || {
            watchlists::table
                .filter(watchlists::user_id.eq(user_id))
                .order(watchlists::id.asc())
                .select(WatchlistModel::as_select())
                .load::<WatchlistModel>(&mut conn)
        })
        .await
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        into_watchlists(result)
    }

    async fn save(&self, watchlist: &Watchlist) -> Result<Watchlist, DomainError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        let new_watchlist = NewWatchlistModel::try_from(watchlist)?;

        let result = tokio::task::spawn_blocking(move || {
            diesel::insert_into(watchlists::table)
                .values(&new_watchlist)
                .returning(WatchlistModel::as_returning())
                .get_result::<WatchlistModel>(&mut conn)
        })
        .await
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        Watchlist::try_from(result)
    }

    async fn update(&self, watchlist: &Watchlist) -> Result<Watchlist, DomainError> {
        let watchlist_id = watchlist.id.ok_or_else(|| {
            DomainError::ValidationError("Watchlist ID is required for updates".to_string())
        })?;

        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        let name = watchlist.name.clone();
        let stocks = encode_stocks(&watchlist.stocks)?;
        let updated_at = watchlist.updated_at.naive_utc();

        let result = tokio::task::spawn_blocking(move || {
            diesel::update(watchlists::table.filter(watchlists::id.eq(watchlist_id)))
                .set((
                    watchlists::name.eq(name),
                    watchlists::stocks.eq(stocks),
                    watchlists::updated_at.eq(updated_at),
                ))
                .returning(WatchlistModel::as_returning())
                .get_result::<WatchlistModel>(&mut conn)
                .optional()
        })
        .await
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        match result {
            Some(model) => Watchlist::try_from(model),
            None => Err(DomainError::WatchlistNotFound(watchlist_id)),
        }
    }
}
