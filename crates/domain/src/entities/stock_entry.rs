use crate::errors::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stock held inside a watchlist, keyed by its symbol.
///
/// Only `symbol` is validated; the remaining fields are display data and are
/// stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntry {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub price: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<Decimal>,
}

impl StockEntry {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        sector: impl Into<String>,
        price: Decimal,
    ) -> Result<Self, DomainError> {
        let entry = Self {
            symbol: symbol.into(),
            name: name.into(),
            sector: sector.into(),
            price,
            change_percent: None,
        };
        entry.validate()?;
        Ok(entry)
    }

    pub fn with_change_percent(mut self, change_percent: Decimal) -> Self {
        self.change_percent = Some(change_percent);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.symbol.trim().is_empty() {
            return Err(DomainError::MissingSymbol);
        }
        Ok(())
    }
}
