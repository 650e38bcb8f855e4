//! Database module providing PostgreSQL connection pooling and utilities.
//!
//! This module manages the database connection pool using sqlx, applies the
//! schema migrations and hosts the repository implementations behind the
//! [`TournamentRepository`] seam.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub mod config;
pub mod memory;
pub mod repository;
pub mod timeouts;

pub use config::{ConfigError, DatabaseConfig};
pub use memory::MemoryTournamentRepository;
pub use repository::{PgTournamentRepository, TournamentRepository};

use crate::tournament::{TournamentError, TournamentResult};
use timeouts::{LONG_OPERATION_TIMEOUT, with_timeout};

/// Database connection pool wrapper
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use swiss_tournament::db::{Database, DatabaseConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), sqlx::Error> {
    ///     let config = DatabaseConfig::development();
    ///     let db = Database::new(&config).await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Build the PostgreSQL tournament repository over this pool
    pub fn tournament_repository(&self) -> PgTournamentRepository {
        PgTournamentRepository::new(self.pool.clone())
    }

    /// Apply the `players`/`matches` schema migrations
    pub async fn migrate(&self) -> TournamentResult<()> {
        match tokio::time::timeout(
            LONG_OPERATION_TIMEOUT,
            sqlx::migrate!("./migrations").run(&self.pool),
        )
        .await
        {
            Ok(result) => {
                result?;
                log::info!("Tournament schema is up to date");
                Ok(())
            }
            Err(_) => Err(TournamentError::Timeout(LONG_OPERATION_TIMEOUT)),
        }
    }

    /// Check if the database connection is healthy
    pub async fn health_check(&self) -> TournamentResult<()> {
        with_timeout(
            timeouts::DEFAULT_QUERY_TIMEOUT,
            sqlx::query("SELECT 1").execute(&self.pool),
        )
        .await?;
        Ok(())
    }

    /// Close the database connection pool
    pub async fn close(self) {
        self.pool.close().await;
    }
}
