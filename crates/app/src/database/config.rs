//! Database Config

use std::time::Duration;

use clap::Args;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// PostgreSQL connection and pool settings.
#[derive(Debug, Clone, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` host
    #[arg(long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    /// `PostgreSQL` port
    #[arg(long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Database name
    #[arg(long = "db-name", env = "DB_NAME")]
    pub name: String,

    /// Database user
    #[arg(long = "db-user", env = "DB_USER")]
    pub user: String,

    /// Database password
    #[arg(long = "db-password", env = "DB_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Require TLS to the database (the server certificate is not verified)
    #[arg(
        long = "db-ssl",
        env = "DB_SSL",
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pub ssl: bool,

    /// Maximum number of pooled connections
    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds to wait for a free pooled connection
    #[arg(
        long = "db-acquire-timeout-seconds",
        env = "DB_ACQUIRE_TIMEOUT_SECONDS",
        default_value_t = 5
    )]
    pub acquire_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// Connection options built from the discrete settings.
    #[must_use]
    pub fn connect_options(&self) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .ssl_mode(self.ssl_mode());

        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }

    /// TLS mode for the connection; `Require` encrypts without verifying the certificate.
    #[must_use]
    pub fn ssl_mode(&self) -> PgSslMode {
        if self.ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        }
    }

    #[must_use]
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        database: DatabaseConfig,
    }

    fn parse(args: &[&str]) -> Result<DatabaseConfig, clap::Error> {
        let mut argv = vec!["test", "--db-name", "eyegic", "--db-user", "eyegic"];

        argv.extend_from_slice(args);

        Cli::try_parse_from(argv).map(|cli| cli.database)
    }

    #[test]
    fn defaults_apply() -> Result<(), clap::Error> {
        let config = parse(&[])?;

        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5432);
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout(), Duration::from_secs(5));
        assert!(!config.ssl);
        assert!(matches!(config.ssl_mode(), PgSslMode::Prefer));

        Ok(())
    }

    #[test]
    fn ssl_flag_requires_tls() -> Result<(), clap::Error> {
        let config = parse(&["--db-ssl", "true"])?;

        assert!(matches!(config.ssl_mode(), PgSslMode::Require));

        Ok(())
    }

    #[test]
    fn connect_options_carry_settings() -> Result<(), clap::Error> {
        let config = parse(&["--db-host", "db.internal", "--db-port", "6543"])?;
        let options = config.connect_options();

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("eyegic"));
        assert_eq!(options.get_username(), "eyegic");

        Ok(())
    }
}
