//! App Context

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use thiserror::Error;
use tracing::info;

use crate::{
    database::{self, Db},
    domain::products::{PgProductsService, ProductsService},
};

/// Failures while building an [`AppContext`].
#[derive(Debug, Error)]
pub enum AppInitError {
    /// The pool could not connect.
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    /// Migrations failed to apply.
    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

/// Services shared by every entry point.
#[derive(Clone)]
pub struct AppContext {
    /// Product operations
    pub products: Arc<dyn ProductsService>,
}

impl Debug for AppContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context from a database URL, optionally applying migrations first.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(url: &str, run_migrations: bool) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;

            info!("database migrations applied");
        }

        Ok(Self::from_db(Db::new(pool)))
    }

    /// Build application context over an existing pool.
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            products: Arc::new(PgProductsService::new(db)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::products::MockProductsService;

    use super::*;

    #[test]
    fn debug_output_hides_services() {
        let context = AppContext {
            products: Arc::new(MockProductsService::new()),
        };

        assert_eq!(format!("{context:?}"), "AppContext { .. }");
    }
}
