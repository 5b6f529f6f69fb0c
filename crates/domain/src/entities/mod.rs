pub mod stock_entry;
pub mod user;
pub mod watchlist;

pub use stock_entry::*;
pub use user::*;
pub use watchlist::*;
