//! App Context

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::{
    database::{self, DatabaseConfig, Db},
    domain::enquiries::{EnquiriesService, PgEnquiriesService},
};

/// Unrecoverable failures while bringing up the persistence layer.
#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to initialise database schema")]
    Schema(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub enquiries: Arc<dyn EnquiriesService>,
    db: Option<Db>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("db", &self.db)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Connect to the database, ensure the schema exists, and wire the services.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting or creating the schema fails.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppInitError> {
        let pool = database::connect(config)
            .await
            .map_err(AppInitError::Database)?;

        database::ensure_schema(&pool)
            .await
            .map_err(AppInitError::Schema)?;

        Ok(Self::from_db(Db::new(pool)))
    }

    #[must_use]
    pub fn from_db(db: Db) -> Self {
        Self {
            enquiries: Arc::new(PgEnquiriesService::new(&db)),
            db: Some(db),
        }
    }

    /// Build a context around an existing service, without a pool to manage.
    #[must_use]
    pub fn with_enquiries_service(enquiries: Arc<dyn EnquiriesService>) -> Self {
        Self {
            enquiries,
            db: None,
        }
    }

    /// Release pooled database connections.
    pub async fn close(&self) {
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}
