pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use entities::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
