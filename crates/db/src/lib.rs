//! SQLite storage layer: connection pool, request sessions, schema, repositories.

use std::str::FromStr;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};

pub mod models;
pub mod repositories;
pub mod session;

pub use session::Session;

pub type DbPool = sqlx::SqlitePool;

/// Schema migrations embedded at compile time from `crates/db/migrations`.
///
/// Every statement is `CREATE ... IF NOT EXISTS`, so applying the set to a
/// database created by an older build is a no-op.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Connection settings for [`Database::connect`].
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// SQLite URL, e.g. `sqlite://database.db`.
    pub url: String,
    pub max_connections: u32,
}

/// Snapshot of pool occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStatus {
    /// Open connections, checked out or idle.
    pub size: u32,
    pub idle: usize,
}

impl PoolStatus {
    pub fn in_use(&self) -> usize {
        (self.size as usize).saturating_sub(self.idle)
    }
}

/// Process-wide storage client.
///
/// Built once at startup and handed to request handlers through application
/// state. Cloning is cheap (the pool is reference counted).
#[derive(Debug, Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    /// Open the pool, creating the database file if it does not exist yet.
    pub async fn connect(config: &DbConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        tracing::debug!(url = %config.url, max_connections = config.max_connections, "SQLite pool opened");
        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by `#[sqlx::test]` fixtures).
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Check out a connection for the duration of one request.
    pub async fn acquire(&self) -> Result<Session, sqlx::Error> {
        let conn = self.pool.acquire().await?;
        Ok(Session::new(conn))
    }

    /// Run a trivial query to confirm the database is reachable.
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool_status(&self) -> PoolStatus {
        PoolStatus {
            size: self.pool.size(),
            idle: self.pool.num_idle(),
        }
    }

    /// Create every table and index that does not exist yet.
    pub async fn run_migrations(&self) -> Result<(), MigrateError> {
        MIGRATOR.run(&self.pool).await
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
