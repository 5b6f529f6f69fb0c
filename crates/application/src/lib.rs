use domain::*;
use infrastructure::*;
use std::sync::Arc;

/// Watchlist Application - wires the SQLite repositories into the domain services
pub struct WatchlistApp {
    pub user_service: UserService,
    pub watchlist_service: WatchlistService,
    pub bootstrap_service: BootstrapService,
}

impl WatchlistApp {
    pub fn new(
        database_path: &str,
        bootstrap_config: BootstrapConfig,
    ) -> Result<Self, DomainError> {
        // Infrastructure layer - database setup
        let database = Database::new(database_path)?;
        let migrations = database.run_migrations()?;
        tracing::debug!(database_path, migrations, "database ready");

        let pool = database.get_pool().clone();

        // Create repository implementations
        let user_repository: Arc<dyn UserRepository> =
            Arc::new(SqliteUserRepository::new(pool.clone()));
        let watchlist_repository: Arc<dyn WatchlistRepository> =
            Arc::new(SqliteWatchlistRepository::new(pool));

        // Domain services
        let user_service = UserService::new(user_repository.clone());
        let watchlist_service =
            WatchlistService::new(watchlist_repository.clone(), user_repository.clone());
        let bootstrap_service =
            BootstrapService::new(bootstrap_config, user_repository, watchlist_repository);

        Ok(Self {
            user_service,
            watchlist_service,
            bootstrap_service,
        })
    }

    /// Ensure the admin account, its default watchlists and the optional
    /// sample account exist
    pub async fn bootstrap(&self) -> Result<BootstrapReport, DomainError> {
        let report = self.bootstrap_service.run().await?;

        if report.is_noop() {
            tracing::info!(admin_id = report.admin_id, "bootstrap: nothing to do");
        } else {
            tracing::info!(
                admin_id = report.admin_id,
                admin_created = report.admin_created,
                watchlists_created = report.watchlists_created.len(),
                stocks_added = report.stocks_added.len(),
                "bootstrap complete"
            );
        }

        if let Some(sample) = &report.sample {
            tracing::info!(
                user_id = sample.user_id,
                user_created = sample.user_created,
                watchlists_created = sample.watchlists_created.len(),
                stocks_added = sample.stocks_added.len(),
                "sample account seeded"
            );
        }

        Ok(report)
    }
}
