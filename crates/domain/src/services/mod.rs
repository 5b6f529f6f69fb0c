pub mod bootstrap_service;
pub mod user_service;
pub mod watchlist_service;

pub use bootstrap_service::{
    default_seeds, sample_seeds, BootstrapConfig, BootstrapReport, BootstrapService,
    SampleAccount, SampleReport, WatchlistSeed, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_FULL_NAME,
    DEFAULT_SAMPLE_FULL_NAME,
};
pub use user_service::UserService;
pub use watchlist_service::WatchlistService;
