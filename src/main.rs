use application::WatchlistApp;
use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    let env_path = std::env::args().nth(1);
    let config = Config::from_env(env_path.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    tracing::info!("Starting TradingGrow watchlist bootstrap");
    config.print_config();

    let app = WatchlistApp::new(&config.database_path, config.bootstrap_config())?;

    let report = app.bootstrap().await?;
    let sample_stocks = report.sample.iter().flat_map(|sample| &sample.stocks_added);
    for (watchlist_type, symbol) in report.stocks_added.iter().chain(sample_stocks) {
        tracing::info!("Seeded {} into a {} watchlist", symbol, watchlist_type);
    }

    Ok(())
}
