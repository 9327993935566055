//! Database connection management

use sqlx::{PgPool, postgres::PgPoolOptions, query};
use tracing::{debug, info};

pub use config::DatabaseConfig;

mod config;

/// Creates the enquiries table when it does not exist yet. Never drops or alters.
pub const CREATE_ENQUIRIES_TABLE_SQL: &str = include_str!("sql/create_enquiries_table.sql");

/// Owned handle to the connection pool shared by the services.
#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Wait for checked-out connections to be returned, then close the pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the first connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .after_connect(|_conn, _meta| {
            Box::pin(async move {
                debug!("opened new PostgreSQL connection");

                Ok(())
            })
        })
        .connect_with(config.connect_options())
        .await?;

    info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        max_connections = config.max_connections,
        "connected to PostgreSQL"
    );

    Ok(pool)
}

/// Ensure the schema the services rely on exists.
///
/// # Errors
///
/// Returns an error when the DDL statement fails.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    query(CREATE_ENQUIRIES_TABLE_SQL).execute(pool).await?;

    info!("database schema ensured");

    Ok(())
}
