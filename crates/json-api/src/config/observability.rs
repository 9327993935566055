//! Logging, tracing and request-metric settings for the enquiries API.

use std::time::Duration;

use clap::{ArgAction, Args, ValueEnum};

/// How log lines are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event, for local development.
    Compact,

    /// One JSON object per event, for log shippers.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `eyegic_json=debug,sqlx=warn`
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Log line format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// OpenTelemetry export and slow-request settings.
///
/// Export is off unless `OTEL_ENABLED=true`; the website deploys without a
/// collector.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    /// Export request spans over OTLP.
    #[arg(long, env = "OTEL_ENABLED", default_value_t = false, action = ArgAction::Set)]
    pub otel_enabled: bool,

    /// Collector gRPC endpoint.
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT", default_value = "http://localhost:4317")]
    pub otel_exporter_otlp_endpoint: String,

    /// Seconds to wait on the collector before dropping a span batch.
    #[arg(long, env = "OTEL_EXPORTER_OTLP_TIMEOUT_SECONDS", default_value_t = 3)]
    pub otel_exporter_otlp_timeout_seconds: u64,

    /// `service.name` resource attribute.
    #[arg(long, env = "OTEL_SERVICE_NAME", default_value = "eyegic-json")]
    pub otel_service_name: String,

    /// `service.version` resource attribute.
    #[arg(long, env = "OTEL_SERVICE_VERSION", default_value = env!("CARGO_PKG_VERSION"))]
    pub otel_service_version: String,

    /// `deployment.environment.name` resource attribute.
    #[arg(long, env = "OTEL_DEPLOYMENT_ENVIRONMENT", default_value = "development")]
    pub otel_deployment_environment: String,

    /// Fraction of request traces to keep; values outside [0, 1] are clamped.
    #[arg(long, env = "OTEL_TRACE_SAMPLE_RATIO", default_value_t = 1.0)]
    pub otel_trace_sample_ratio: f64,

    /// Requests slower than this many milliseconds are logged as warnings.
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000)]
    pub slow_request_threshold_ms: u64,
}

impl ObservabilityConfig {
    /// Exporter timeout as a [`Duration`].
    #[must_use]
    pub fn otlp_timeout(&self) -> Duration {
        Duration::from_secs(self.otel_exporter_otlp_timeout_seconds)
    }

    /// Sample ratio clamped to [0, 1].
    #[must_use]
    pub fn sample_ratio(&self) -> f64 {
        self.otel_trace_sample_ratio.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use testresult::TestResult;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[command(flatten)]
        logging: LoggingConfig,

        #[command(flatten)]
        observability: ObservabilityConfig,
    }

    #[test]
    fn defaults_keep_export_off() -> TestResult {
        let cli = Cli::try_parse_from(["eyegic-json"])?;

        assert_eq!(cli.logging.log_format, LogFormat::Compact);
        assert!(!cli.observability.otel_enabled, "export should be opt-in");
        assert_eq!(cli.observability.otel_service_name, "eyegic-json");
        assert_eq!(cli.observability.otlp_timeout(), Duration::from_secs(3));

        Ok(())
    }

    #[test]
    fn sample_ratio_is_clamped() -> TestResult {
        let above = Cli::try_parse_from(["eyegic-json", "--otel-trace-sample-ratio", "2.5"])?;
        let below = Cli::try_parse_from(["eyegic-json", "--otel-trace-sample-ratio=-0.5"])?;
        let within = Cli::try_parse_from(["eyegic-json", "--otel-trace-sample-ratio", "0.25"])?;

        assert!((above.observability.sample_ratio() - 1.0).abs() < f64::EPSILON, "upper bound");
        assert!(below.observability.sample_ratio().abs() < f64::EPSILON, "lower bound");
        assert!(
            (within.observability.sample_ratio() - 0.25).abs() < f64::EPSILON,
            "in range"
        );

        Ok(())
    }
}
