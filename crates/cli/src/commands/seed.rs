//! Seed the database with employees from a YAML file.
//!
//! The file is a list of employee bodies in the same shape the API accepts:
//!
//! ```yaml
//! - name: Ann
//!   email: ann@example.com
//!   department: Eng
//!   age: 30
//!   salary: 90000.0
//! ```
//!
//! The whole file is parsed before connecting. Inserts run in one
//! transaction, so a duplicate email leaves the table as it was.

use std::path::Path;

use employee_registry_api::config::{ConfigError, DatabaseConfig};
use employee_registry_api::db::{self, EmployeeRepository, RepositoryError};
use employee_registry_api::models::EmployeeFields;
use thiserror::Error;

/// Errors that can occur while seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Entry {index}: {source}")]
    Insert {
        index: usize,
        source: RepositoryError,
    },
}

/// Parse a seed document.
///
/// # Errors
///
/// Returns `SeedError::Yaml` if the document is not a list of employee bodies
/// with every field present and well-typed.
pub fn parse(content: &str) -> Result<Vec<EmployeeFields>, SeedError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Insert every employee in `path` and return how many were inserted.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, the database is
/// unreachable, or any insert fails. Nothing is committed on error.
pub async fn employees(path: &Path) -> Result<usize, SeedError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Read {
            path: path.display().to_string(),
            source,
        })?;
    let employees = parse(&content)?;

    tracing::info!(path = %path.display(), count = employees.len(), "Parsed seed file");

    let config = DatabaseConfig::from_env()?;
    let pool = db::create_pool(&config).await?;
    db::ensure_schema(&pool).await?;

    let mut tx = pool.begin().await?;
    let mut repo = EmployeeRepository::new(&mut *tx);
    for (index, fields) in employees.iter().enumerate() {
        let employee = repo
            .insert(fields)
            .await
            .map_err(|source| SeedError::Insert { index, source })?;
        tracing::debug!(employee_id = %employee.id, email = %employee.fields.email, "Inserted employee");
    }
    tx.commit().await?;

    Ok(employees.len())
}
