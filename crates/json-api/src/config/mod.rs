//! Server configuration module

use clap::Parser;

use eyegic_app::database::DatabaseConfig;

use crate::config::{
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod observability;
pub(crate) mod server;

pub(crate) use self::observability::LogFormat;

/// Eyegic JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "eyegic-json", about = "Eyegic enquiries JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Enquiries database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    const REQUIRED: [&str; 5] = ["eyegic-json", "--db-name", "eyegic", "--db-user", "eyegic"];

    #[test]
    fn defaults_bind_all_interfaces_on_port_3000() -> TestResult {
        let config = ServerConfig::try_parse_from(REQUIRED)?;

        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
        assert!(matches!(config.logging.log_format, LogFormat::Compact));
        assert!(!config.observability.otel_enabled, "otel should be opt-in");
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from(
            REQUIRED.into_iter().chain([
                "--host",
                "127.0.0.1",
                "--port",
                "8080",
                "--log-format",
                "json",
                "--otel-enabled",
                "true",
            ]),
        )?;

        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert!(config.observability.otel_enabled, "otel should be enabled");

        Ok(())
    }

    #[test]
    fn missing_database_name_is_rejected() {
        let result = ServerConfig::try_parse_from(["eyegic-json", "--db-user", "eyegic"]);

        assert!(result.is_err(), "DB_NAME should be required");
    }
}
