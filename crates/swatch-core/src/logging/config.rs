//! Logging configuration.
//!
//! Supports configuration via:
//! - Environment variables (SWATCH_LOG, RUST_LOG, SWATCH_LOG_FORMAT)
//! - CLI flags (-v, -q, --log-format)

use serde::{Deserialize, Serialize};

/// Environment variable for the log level.
pub const ENV_LOG: &str = "SWATCH_LOG";

/// Environment variable for the log format.
pub const ENV_LOG_FORMAT: &str = "SWATCH_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable console format (default).
    #[default]
    Human,
    /// Machine-parseable JSON lines.
    Jsonl,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "console" | "pretty" => Ok(LogFormat::Human),
            "jsonl" | "json" => Ok(LogFormat::Jsonl),
            _ => Err(format!("unknown log format: {}", s)),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Human => write!(f, "human"),
            LogFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Log level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    /// Default: the CLI only reports problems unless asked.
    #[default]
    Warn,
    Error,
    Off,
}

impl LogLevel {
    /// Apply `-v` / `-q` counts: each `-v` is one step more verbose, `-q`
    /// silences everything.
    pub fn adjusted(self, verbose: u8, quiet: bool) -> Self {
        if quiet {
            return LogLevel::Off;
        }
        let mut level = self;
        for _ in 0..verbose {
            level = match level {
                LogLevel::Off => LogLevel::Error,
                LogLevel::Error => LogLevel::Warn,
                LogLevel::Warn => LogLevel::Info,
                LogLevel::Info => LogLevel::Debug,
                LogLevel::Debug | LogLevel::Trace => LogLevel::Trace,
            };
        }
        level
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" | "none" | "quiet" => Ok(LogLevel::Off),
            _ => Err(format!("unknown log level: {}", s)),
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
            LogLevel::Off => write!(f, "off"),
        }
    }
}

impl From<LogLevel> for tracing_subscriber::filter::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
            LogLevel::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            LogLevel::Info => tracing_subscriber::filter::LevelFilter::INFO,
            LogLevel::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            LogLevel::Error => tracing_subscriber::filter::LevelFilter::ERROR,
            LogLevel::Off => tracing_subscriber::filter::LevelFilter::OFF,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Output format.
    pub format: LogFormat,
    /// Minimum log level.
    pub level: LogLevel,
    /// Whether to include timestamps in human output.
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            format: LogFormat::Human,
            level: LogLevel::Warn,
            timestamps: false,
        }
    }
}

impl LogConfig {
    /// Create config from environment and CLI overrides.
    pub fn from_env(cli_level: Option<LogLevel>, cli_format: Option<LogFormat>) -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), cli_level, cli_format)
    }

    /// Same as [`LogConfig::from_env`] with an injectable variable lookup.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        cli_level: Option<LogLevel>,
        cli_format: Option<LogFormat>,
    ) -> Self {
        let mut config = LogConfig::default();

        // SWATCH_LOG takes precedence over RUST_LOG
        if let Some(val) = lookup(ENV_LOG) {
            if let Ok(level) = val.parse::<LogLevel>() {
                config.level = level;
            }
        } else if let Some(val) = lookup("RUST_LOG") {
            if val.contains("trace") {
                config.level = LogLevel::Trace;
            } else if val.contains("debug") {
                config.level = LogLevel::Debug;
            } else if val.contains("info") {
                config.level = LogLevel::Info;
            } else if val.contains("error") {
                config.level = LogLevel::Error;
            }
        }

        if let Some(val) = lookup(ENV_LOG_FORMAT) {
            if let Ok(format) = val.parse::<LogFormat>() {
                config.format = format;
            }
        }

        // CLI overrides take final precedence
        if let Some(level) = cli_level {
            config.level = level;
        }
        if let Some(format) = cli_format {
            config.format = format;
        }

        config
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_timestamps(mut self, enabled: bool) -> Self {
        self.timestamps = enabled;
        self
    }
}
