use domain::{
    BootstrapConfig, SampleAccount, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_FULL_NAME,
    DEFAULT_SAMPLE_FULL_NAME,
};
use dotenv::dotenv;
use dotenv::from_path;
use std::env;

pub const DEFAULT_DATABASE_PATH: &str = "tradinggrow.db";
pub const DEFAULT_LOG_FILTER: &str =
    "tradinggrow=info,application=info,domain=info,infrastructure=info";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_path: String,
    pub admin_email: String,
    pub admin_full_name: String,
    /// Sample data is seeded only when this is set
    pub sample_user_email: Option<String>,
    pub sample_user_full_name: String,
    pub log_filter: String,
}

impl Config {
    /// Load configuration from a specified `.env` file path or default to the root `.env` file.
    ///
    /// Values containing spaces must be quoted in the `.env` file
    /// (`ADMIN_FULL_NAME="Admin User"`); an unquoted one is a parse error.
    pub fn from_env(env_path: Option<&str>) -> Result<Self, dotenv::Error> {
        match env_path {
            Some(path) => {
                from_path(path)?;
            }
            None => {
                // A missing default `.env` is fine, the process environment still applies
                dotenv().ok();
            }
        }

        Ok(Self::from_vars(|key| env::var(key).ok()))
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let set = |key: &str| var(key).filter(|value| !value.trim().is_empty());
        let non_empty = |key: &str, default: &str| set(key).unwrap_or_else(|| default.to_string());

        Self {
            database_path: non_empty("DATABASE_PATH", DEFAULT_DATABASE_PATH),
            admin_email: non_empty("ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL),
            admin_full_name: non_empty("ADMIN_FULL_NAME", DEFAULT_ADMIN_FULL_NAME),
            sample_user_email: set("SAMPLE_USER_EMAIL"),
            sample_user_full_name: non_empty("SAMPLE_USER_FULL_NAME", DEFAULT_SAMPLE_FULL_NAME),
            log_filter: non_empty("RUST_LOG", DEFAULT_LOG_FILTER),
        }
    }

    pub fn bootstrap_config(&self) -> BootstrapConfig {
        let config = BootstrapConfig::new(&self.admin_email, &self.admin_full_name);

        match &self.sample_user_email {
            Some(email) => config
                .with_sample_account(SampleAccount::new(email, &self.sample_user_full_name)),
            None => config,
        }
    }

    pub fn print_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database: {}", self.database_path);
        tracing::info!("  Admin: {} <{}>", self.admin_full_name, self.admin_email);
        match &self.sample_user_email {
            Some(email) => {
                tracing::info!("  Sample account: {} <{}>", self.sample_user_full_name, email)
            }
            None => tracing::info!("  Sample account: disabled"),
        }
    }
}
