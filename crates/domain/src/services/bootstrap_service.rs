//! Idempotent seeding of the admin account, its default watchlists and the
//! optional sample account.
//!
//! Every step reads first and writes only when the record is absent, so the
//! procedure can run on every startup. Steps are not wrapped in a
//! transaction: a failing write leaves the earlier steps committed, and a
//! later run picks up where the failed one stopped.

use crate::entities::{StockEntry, User, Watchlist, WatchlistType};
use crate::errors::DomainError;
use crate::repositories::{UserRepository, WatchlistRepository};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@tradinggrow.com";
pub const DEFAULT_ADMIN_FULL_NAME: &str = "Admin User";
pub const DEFAULT_SAMPLE_FULL_NAME: &str = "Sample Trader";

/// One canonical watchlist and the stocks it must contain.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchlistSeed {
    pub watchlist_type: WatchlistType,
    pub name: String,
    pub stocks: Vec<StockEntry>,
}

/// A non-admin account populated with example watchlists.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleAccount {
    pub email: String,
    pub full_name: String,
    pub seeds: Vec<WatchlistSeed>,
}

impl SampleAccount {
    pub fn new(email: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            seeds: sample_seeds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapConfig {
    pub admin_email: String,
    pub admin_full_name: String,
    pub seeds: Vec<WatchlistSeed>,
    pub sample_account: Option<SampleAccount>,
}

impl BootstrapConfig {
    pub fn new(admin_email: impl Into<String>, admin_full_name: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
            admin_full_name: admin_full_name.into(),
            seeds: default_seeds(),
            sample_account: None,
        }
    }

    pub fn with_sample_account(mut self, sample_account: SampleAccount) -> Self {
        self.sample_account = Some(sample_account);
        self
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_FULL_NAME)
    }
}

fn seed_stock(
    symbol: &str,
    name: &str,
    sector: &str,
    price: Decimal,
    change_percent: Option<Decimal>,
) -> StockEntry {
    StockEntry {
        symbol: symbol.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        price,
        change_percent,
    }
}

pub fn default_seeds() -> Vec<WatchlistSeed> {
    vec![
        WatchlistSeed {
            watchlist_type: WatchlistType::Entry,
            name: "Admin Entry Zone Stocks".to_string(),
            stocks: vec![seed_stock(
                "NFLX",
                "Netflix Inc.",
                "Technology",
                dec!(400.00),
                Some(dec!(2.5)),
            )],
        },
        WatchlistSeed {
            watchlist_type: WatchlistType::Breakout,
            name: "Admin Breakout Stocks".to_string(),
            stocks: vec![seed_stock(
                "NVDA",
                "NVIDIA Corp.",
                "Technology",
                dec!(700.00),
                Some(dec!(5.0)),
            )],
        },
    ]
}

pub fn sample_seeds() -> Vec<WatchlistSeed> {
    vec![
        WatchlistSeed {
            watchlist_type: WatchlistType::Entry,
            name: "Entry Zone Example".to_string(),
            stocks: vec![
                seed_stock("AAPL", "Apple Inc.", "Technology", dec!(175.50), None),
                seed_stock("TSLA", "Tesla Inc.", "Consumer", dec!(245.80), None),
            ],
        },
        WatchlistSeed {
            watchlist_type: WatchlistType::Breakout,
            name: "Breakout Example".to_string(),
            stocks: vec![
                seed_stock("GOOGL", "Alphabet Inc.", "Technology", dec!(2850.25), None),
                seed_stock("JPM", "JPMorgan Chase", "Financials", dec!(145.30), None),
            ],
        },
    ]
}

/// Writes made for the sample account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleReport {
    pub user_id: i32,
    pub user_created: bool,
    pub watchlists_created: Vec<WatchlistType>,
    pub stocks_added: Vec<(WatchlistType, String)>,
}

/// What a bootstrap run actually wrote. Empty on a repeat run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BootstrapReport {
    pub admin_id: i32,
    pub admin_created: bool,
    pub watchlists_created: Vec<WatchlistType>,
    pub stocks_added: Vec<(WatchlistType, String)>,
    pub sample: Option<SampleReport>,
}

impl BootstrapReport {
    pub fn is_noop(&self) -> bool {
        let sample_noop = self.sample.as_ref().map_or(true, |sample| {
            !sample.user_created
                && sample.watchlists_created.is_empty()
                && sample.stocks_added.is_empty()
        });

        sample_noop
            && !self.admin_created
            && self.watchlists_created.is_empty()
            && self.stocks_added.is_empty()
    }
}

#[derive(Default)]
struct SeedWrites {
    watchlists_created: Vec<WatchlistType>,
    stocks_added: Vec<(WatchlistType, String)>,
}

pub struct BootstrapService {
    config: BootstrapConfig,
    user_repository: Arc<dyn UserRepository>,
    watchlist_repository: Arc<dyn WatchlistRepository>,
}

impl BootstrapService {
    pub fn new(
        config: BootstrapConfig,
        user_repository: Arc<dyn UserRepository>,
        watchlist_repository: Arc<dyn WatchlistRepository>,
    ) -> Self {
        Self {
            config,
            user_repository,
            watchlist_repository,
        }
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    pub async fn run(&self) -> Result<BootstrapReport, DomainError> {
        if let Some(sample) = &self.config.sample_account {
            if sample.email == self.config.admin_email {
                return Err(DomainError::ValidationError(
                    "Sample account email must differ from the admin email".to_string(),
                ));
            }
        }

        let mut report = BootstrapReport::default();

        let (admin_id, admin_created) = self
            .ensure_user(&self.config.admin_email, &self.config.admin_full_name, true)
            .await?;
        report.admin_id = admin_id;
        report.admin_created = admin_created;

        let writes = self.ensure_seeds(admin_id, &self.config.seeds).await?;
        report.watchlists_created = writes.watchlists_created;
        report.stocks_added = writes.stocks_added;

        if let Some(sample) = &self.config.sample_account {
            let (user_id, user_created) = self
                .ensure_user(&sample.email, &sample.full_name, false)
                .await?;
            let writes = self.ensure_seeds(user_id, &sample.seeds).await?;
            report.sample = Some(SampleReport {
                user_id,
                user_created,
                watchlists_created: writes.watchlists_created,
                stocks_added: writes.stocks_added,
            });
        }

        Ok(report)
    }

    /// Returns the user's id and whether this call created it.
    async fn ensure_user(
        &self,
        email: &str,
        full_name: &str,
        is_admin: bool,
    ) -> Result<(i32, bool), DomainError> {
        if let Some(user) = self.user_repository.find_by_email(email).await? {
            tracing::debug!(email = %user.email, "user already exists");
            return Ok((stored_id(&user)?, false));
        }

        let mut user = User::new(email.to_string(), full_name.to_string());
        user.is_admin = is_admin;
        user.validate()?;

        let saved = self.user_repository.save(&user).await?;
        tracing::info!(user_id = ?saved.id, email = %saved.email, is_admin, "created user");
        Ok((stored_id(&saved)?, true))
    }

    async fn ensure_seeds(
        &self,
        user_id: i32,
        seeds: &[WatchlistSeed],
    ) -> Result<SeedWrites, DomainError> {
        let mut writes = SeedWrites::default();

        for seed in seeds {
            let mut watchlist = self.ensure_watchlist(user_id, seed, &mut writes).await?;

            let missing: Vec<&StockEntry> = seed
                .stocks
                .iter()
                .filter(|stock| !watchlist.has_symbol(&stock.symbol))
                .collect();
            if missing.is_empty() {
                continue;
            }

            for stock in missing {
                watchlist.add_stock(stock.clone())?;
                tracing::info!(
                    user_id,
                    watchlist_type = %seed.watchlist_type,
                    symbol = %stock.symbol,
                    "seeded stock"
                );
                writes
                    .stocks_added
                    .push((seed.watchlist_type, stock.symbol.clone()));
            }

            self.watchlist_repository.update(&watchlist).await?;
        }

        Ok(writes)
    }

    async fn ensure_watchlist(
        &self,
        user_id: i32,
        seed: &WatchlistSeed,
        writes: &mut SeedWrites,
    ) -> Result<Watchlist, DomainError> {
        if let Some(watchlist) = self
            .watchlist_repository
            .find_by_user_and_type(user_id, seed.watchlist_type)
            .await?
        {
            return Ok(watchlist);
        }

        let watchlist = Watchlist::new(seed.name.clone(), user_id, seed.watchlist_type);
        let saved = self.watchlist_repository.save(&watchlist).await?;
        tracing::info!(
            watchlist_id = ?saved.id,
            user_id,
            watchlist_type = %seed.watchlist_type,
            "created watchlist"
        );
        writes.watchlists_created.push(seed.watchlist_type);
        Ok(saved)
    }
}

fn stored_id(user: &User) -> Result<i32, DomainError> {
    user.id.ok_or_else(|| {
        DomainError::RepositoryError(format!("user {} was stored without an id", user.email))
    })
}
