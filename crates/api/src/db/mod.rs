//! Database operations for the employee registry `PostgreSQL`.
//!
//! ## Tables
//!
//! - `employees` - One row per employee; `id` is generated, `email` is unique
//!
//! # Schema
//!
//! There is no migration system. [`ensure_schema`] issues idempotent
//! `CREATE ... IF NOT EXISTS` statements on startup, and the same call is
//! available from the CLI:
//! ```bash
//! cargo run -p employee-registry-cli -- schema ensure
//! ```
//!
//! # Connections
//!
//! Handlers never hold the pool directly. They acquire a [`DbConnection`] for
//! the request, hand it to a repository, and let it drop: dropping the guard
//! returns the connection to the pool on every exit path.

pub mod employees;

use secrecy::ExposeSecret;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};
use thiserror::Error;

use crate::config::DatabaseConfig;

pub use employees::EmployeeRepository;

/// A pooled connection checked out for the duration of one request.
pub type DbConnection = PoolConnection<Postgres>;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Map a write error, turning unique violations into [`RepositoryError::Conflict`].
    pub(crate) fn from_write(err: sqlx::Error, conflict: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict.to_owned());
        }
        Self::Database(err)
    }
}

/// Statements that bring an empty database up to the current schema.
///
/// Every statement must be safe to run against an already-initialized database.
const SCHEMA: &[&str] = &[
    r"
    CREATE TABLE IF NOT EXISTS employees (
        id          SERIAL PRIMARY KEY,
        name        TEXT NOT NULL,
        email       TEXT NOT NULL,
        department  TEXT NOT NULL,
        age         INTEGER NOT NULL,
        salary      DOUBLE PRECISION NOT NULL,
        CONSTRAINT employees_email_key UNIQUE (email)
    )
    ",
    "CREATE INDEX IF NOT EXISTS employees_name_idx ON employees (name)",
];

/// Create a `PostgreSQL` connection pool from the configured bounds.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config)
        .connect(config.url.expose_secret())
        .await
}

/// Create a pool that opens its first connection on first use.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL cannot be parsed.
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect_lazy(config.url.expose_secret())
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
}

/// Create the `employees` table and its indexes if they are missing.
///
/// Runs in a single transaction so a partially-created schema is never left
/// behind.
///
/// # Errors
///
/// Returns `sqlx::Error` if any statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    for statement in SCHEMA.iter().copied() {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!("Database schema ensured");
    Ok(())
}
