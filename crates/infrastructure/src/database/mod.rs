use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use domain::DomainError;

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

/// Migrations bundled with this crate, applied by `Database::run_migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub fn new(database_path: &str) -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let pool = r2d2::Pool::builder()
            .build(manager)
            .map_err(|e| {
                DomainError::RepositoryError(format!(
                    "Failed to create SQLite connection pool: {}",
                    e
                ))
            })?;
        Ok(Database { pool })
    }

    /// Applies any pending migrations and returns how many ran.
    pub fn run_migrations(&self) -> Result<usize, DomainError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        for version in &applied {
            tracing::info!(%version, "applied migration");
        }
        Ok(applied.len())
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }
}
