//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{DbConnection, RepositoryError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the connection pool.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool }),
        }
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Check out a connection for the current request.
    ///
    /// The connection goes back to the pool when the returned guard is
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the pool cannot supply a
    /// connection within its acquire timeout.
    pub async fn connection(&self) -> Result<DbConnection, RepositoryError> {
        Ok(self.inner.pool.acquire().await?)
    }
}
