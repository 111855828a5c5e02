//! Schema management commands.
//!
//! The API server ensures the schema on every start; this command does the
//! same without serving, for deploy pipelines that prepare the database first.

use employee_registry_api::config::{ConfigError, DatabaseConfig};
use employee_registry_api::db;
use thiserror::Error;

/// Errors that can occur while ensuring the schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Database settings are missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection or DDL error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create the `employees` table and its indexes if they do not exist.
///
/// # Errors
///
/// Returns an error if configuration is missing or the database rejects the DDL.
pub async fn ensure() -> Result<(), SchemaError> {
    let config = DatabaseConfig::from_env()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&config).await?;

    tracing::info!("Ensuring employees schema...");
    db::ensure_schema(&pool).await?;

    tracing::info!("Schema is up to date");
    Ok(())
}
