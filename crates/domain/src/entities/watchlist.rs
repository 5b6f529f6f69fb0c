use crate::entities::StockEntry;
use crate::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchlistType {
    /// Stocks being watched for a buy entry signal
    Entry,
    /// Stocks showing a price breakout pattern
    Breakout,
}

impl WatchlistType {
    pub const ALL: [WatchlistType; 2] = [WatchlistType::Entry, WatchlistType::Breakout];

    pub fn as_str(&self) -> &'static str {
        match self {
            WatchlistType::Entry => "entry",
            WatchlistType::Breakout => "breakout",
        }
    }
}

impl fmt::Display for WatchlistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WatchlistType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entry" => Ok(WatchlistType::Entry),
            "breakout" => Ok(WatchlistType::Breakout),
            other => Err(DomainError::InvalidWatchlistType(other.to_string())),
        }
    }
}

/// A named list of stocks owned by a user.
///
/// Symbols are unique within one watchlist. `add_stock` is insert-if-absent:
/// an entry whose symbol is already present is ignored, never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Watchlist {
    pub id: Option<i32>,
    pub name: String,
    pub user_id: i32,
    pub watchlist_type: WatchlistType,
    pub stocks: Vec<StockEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Watchlist {
    pub fn new(name: String, user_id: i32, watchlist_type: WatchlistType) -> Self {
        Self::new_at(name, user_id, watchlist_type, Utc::now())
    }

    pub fn new_at(
        name: String,
        user_id: i32,
        watchlist_type: WatchlistType,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: None,
            name,
            user_id,
            watchlist_type,
            stocks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Watchlist name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.stocks.iter().any(|stock| stock.symbol == symbol)
    }

    pub fn stock(&self, symbol: &str) -> Option<&StockEntry> {
        self.stocks.iter().find(|stock| stock.symbol == symbol)
    }

    pub fn symbols(&self) -> Vec<&str> {
        self.stocks.iter().map(|stock| stock.symbol.as_str()).collect()
    }

    pub fn add_stock(&mut self, entry: StockEntry) -> Result<(), DomainError> {
        self.add_stock_at(entry, Utc::now())
    }

    pub fn add_stock_at(
        &mut self,
        entry: StockEntry,
        now: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        entry.validate()?;

        if self.has_symbol(&entry.symbol) {
            return Ok(());
        }

        self.stocks.push(entry);
        self.touch(now);
        Ok(())
    }

    /// Removes the stock with `symbol`, returning whether anything was removed.
    pub fn remove_stock(&mut self, symbol: &str) -> bool {
        self.remove_stock_at(symbol, Utc::now())
    }

    pub fn remove_stock_at(&mut self, symbol: &str, now: DateTime<Utc>) -> bool {
        let before = self.stocks.len();
        self.stocks.retain(|stock| stock.symbol != symbol);

        if self.stocks.len() == before {
            return false;
        }

        self.touch(now);
        true
    }

    // updated_at never moves backwards, even if the clock does
    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = self.updated_at.max(now);
    }
}
