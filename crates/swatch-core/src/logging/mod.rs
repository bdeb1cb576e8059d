//! Structured logging for the swatch CLI.
//!
//! Provides dual-mode logging:
//! - Human-readable console output for interactive use
//! - Machine-parseable JSONL for editor front-ends and CI
//!
//! stdout is reserved for command payloads (JSON/MD output); all log
//! output goes to stderr.

pub mod config;

pub use config::{LogConfig, LogFormat, LogLevel};

use std::io::IsTerminal;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Crates whose events are shown at the configured level.
const LOG_TARGETS: &[&str] = &["swatch_core", "swatch_config"];

/// Build the filter directive for a level, e.g. `swatch_core=info,swatch_config=info`.
pub fn filter_directive(level: LogLevel) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize the logging subsystem.
///
/// Must be called once at startup before any logging occurs. A second call
/// is ignored.
pub fn init_logging(config: &LogConfig) {
    let filter = EnvFilter::new(filter_directive(config.level));

    let result = match config.format {
        LogFormat::Human => {
            let use_ansi = std::io::stderr().is_terminal();
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(use_ansi);

            if config.timestamps {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer)
                    .try_init()
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt_layer.without_time())
                    .try_init()
            }
        }
        LogFormat::Jsonl => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("logging already initialized");
    }
}

/// Generate a unique run ID for this invocation.
pub fn generate_run_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    // Shorten to first 12 hex chars for readability
    format!("run-{}", &uuid.simple().to_string()[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_covers_all_targets() {
        assert_eq!(
            filter_directive(LogLevel::Debug),
            "swatch_core=debug,swatch_config=debug"
        );
    }

    #[test]
    fn run_id_shape() {
        let id = generate_run_id();
        assert!(id.starts_with("run-"));
        assert_eq!(id.len(), 16);
        assert_ne!(id, generate_run_id());
    }

    #[test]
    fn init_twice_is_harmless() {
        init_logging(&LogConfig::default());
        init_logging(&LogConfig::default().with_format(LogFormat::Jsonl));
    }
}
