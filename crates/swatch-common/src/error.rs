//! Error types for swatch.
//!
//! This module provides structured error handling with:
//! - Stable error codes for machine parsing
//! - Category classification for error grouping
//! - Remediation suggestions for humans
//! - Suggested actions for automation (editor front-ends, CI checks)
//!
//! # Human-Facing Output
//!
//! ```text
//! ✗ Invalid Color
//!   Reason: invalid color "#12345": expected 6 hex digits, got 5
//!   Fix: Use #rrggbb or oklch(L% C H), e.g. oklch(60% 0.18 262).
//! ```
//!
//! # Machine-Facing Output
//!
//! ```json
//! {
//!   "code": 20,
//!   "category": "color",
//!   "message": "invalid color ...",
//!   "suggested_action": "fix_input"
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for swatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Site configuration errors (missing file, bad YAML, invalid values).
    Config,
    /// Color parsing and range errors.
    Color,
    /// File I/O and serialization errors.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Color => write!(f, "color"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Suggested follow-up for callers that react to errors programmatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    /// Retry the operation.
    Retry,
    /// Run `swatch check` for a full report.
    RunCheck,
    /// Correct the offending input value.
    FixInput,
    /// Restore the configuration file from a known good copy.
    RestoreConfig,
    /// Manual intervention required.
    ManualIntervention,
}

impl std::fmt::Display for SuggestedAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuggestedAction::Retry => write!(f, "retry"),
            SuggestedAction::RunCheck => write!(f, "run_check"),
            SuggestedAction::FixInput => write!(f, "fix_input"),
            SuggestedAction::RestoreConfig => write!(f, "restore_config"),
            SuggestedAction::ManualIntervention => write!(f, "manual_intervention"),
        }
    }
}

/// Unified error type for swatch.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("config file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("invalid site config: {0}")]
    InvalidSiteConfig(String),

    #[error("invalid content block: {0}")]
    InvalidContent(String),

    // Color errors (20-29)
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("color out of range: {0}")]
    ColorOutOfRange(String),

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(String),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// Error codes are stable and grouped by category:
    /// - 10-19: Configuration errors
    /// - 20-29: Color errors
    /// - 60-69: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::ConfigNotFound { .. } => 11,
            Error::InvalidSiteConfig(_) => 12,
            Error::InvalidContent(_) => 13,
            Error::InvalidColor(_) => 20,
            Error::ColorOutOfRange(_) => 21,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
            Error::Yaml(_) => 62,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::ConfigNotFound { .. }
            | Error::InvalidSiteConfig(_)
            | Error::InvalidContent(_) => ErrorCategory::Config,
            Error::InvalidColor(_) | Error::ColorOutOfRange(_) => ErrorCategory::Color,
            Error::Io(_) | Error::Json(_) | Error::Yaml(_) => ErrorCategory::Io,
        }
    }

    /// Returns the suggested action for automated callers.
    pub fn suggested_action(&self) -> SuggestedAction {
        match self {
            Error::ConfigNotFound { .. } => SuggestedAction::FixInput,
            Error::InvalidSiteConfig(_) => SuggestedAction::RunCheck,
            Error::InvalidContent(_) => SuggestedAction::RunCheck,
            Error::InvalidColor(_) => SuggestedAction::FixInput,
            Error::ColorOutOfRange(_) => SuggestedAction::FixInput,
            Error::Io(_) => SuggestedAction::Retry,
            Error::Json(_) => SuggestedAction::ManualIntervention,
            Error::Yaml(_) => SuggestedAction::RestoreConfig,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::ConfigNotFound { .. } => {
                "Pass --config <path>, set SWATCH_CONFIG, or run from the site directory."
            }
            Error::InvalidSiteConfig(_) => {
                "Run 'swatch check' to list every problem in the site configuration."
            }
            Error::InvalidContent(_) => {
                "Each content block needs a 'kind' of hero, services or portfolio and its fields."
            }
            Error::InvalidColor(_) => {
                "Use #rrggbb or oklch(L% C H), e.g. oklch(60% 0.18 262)."
            }
            Error::ColorOutOfRange(_) => {
                "Keep lightness in 0-100, chroma in 0-0.4 and hue in 0-360 (exclusive)."
            }
            Error::Io(_) => "Check the file exists and is writable, then retry.",
            Error::Json(_) => "Internal serialization failure; please report it.",
            Error::Yaml(_) => "Fix the YAML syntax or restore the file from version control.",
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::ConfigNotFound { .. } => "Config Not Found",
            Error::InvalidSiteConfig(_) => "Invalid Site Config",
            Error::InvalidContent(_) => "Invalid Content",
            Error::InvalidColor(_) => "Invalid Color",
            Error::ColorOutOfRange(_) => "Color Out Of Range",
            Error::Io(_) => "I/O Error",
            Error::Json(_) => "JSON Error",
            Error::Yaml(_) => "YAML Error",
        }
    }
}

/// Structured error response for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    /// Stable error code.
    pub code: u32,

    /// Error category for grouping.
    pub category: ErrorCategory,

    /// Human-readable error message.
    pub message: String,

    /// Suggested action for automated callers.
    pub suggested_action: SuggestedAction,

    /// Additional structured context (e.g., file path).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub context: HashMap<String, serde_json::Value>,
}

impl From<&Error> for StructuredError {
    fn from(err: &Error) -> Self {
        let mut context = HashMap::new();

        if let Error::ConfigNotFound { path } = err {
            context.insert(
                "path".to_string(),
                serde_json::json!(path.display().to_string()),
            );
        }

        StructuredError {
            code: err.code(),
            category: err.category(),
            message: err.to_string(),
            suggested_action: err.suggested_action(),
            context,
        }
    }
}

impl StructuredError {
    /// Add additional context to the error.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(v) = serde_json::to_value(value) {
            self.context.insert(key.into(), v);
        }
        self
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"code":{},"error":"serialization_failed"}}"#, self.code)
        })
    }

    /// Serialize to pretty JSON string.
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| self.to_json())
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(Error::ConfigNotFound { path: PathBuf::from("x") }.code(), 11);
        assert_eq!(Error::InvalidColor("x".into()).code(), 20);
        assert_eq!(Error::Yaml("bad".into()).code(), 62);
    }

    #[test]
    fn test_error_category() {
        assert_eq!(Error::InvalidContent("test".into()).category(), ErrorCategory::Config);
        assert_eq!(
            Error::ColorOutOfRange("l".into()).category(),
            ErrorCategory::Color
        );
        assert_eq!(Error::Yaml("bad".into()).category(), ErrorCategory::Io);
    }

    #[test]
    fn test_suggested_action() {
        assert_eq!(
            Error::InvalidColor("x".into()).suggested_action(),
            SuggestedAction::FixInput
        );
        assert_eq!(
            Error::Yaml("x".into()).suggested_action(),
            SuggestedAction::RestoreConfig
        );
    }

    #[test]
    fn test_structured_error_from_error() {
        let err = Error::ConfigNotFound {
            path: PathBuf::from("/tmp/site/config.yaml"),
        };
        let structured = StructuredError::from(&err);

        assert_eq!(structured.code, 11);
        assert_eq!(structured.category, ErrorCategory::Config);
        assert_eq!(
            structured.context.get("path"),
            Some(&serde_json::json!("/tmp/site/config.yaml"))
        );
    }

    #[test]
    fn test_structured_error_json() {
        let err = Error::ColorOutOfRange("lightness".into());
        let json = StructuredError::from(&err).to_json();

        assert!(json.contains(r#""code":21"#));
        assert!(json.contains(r#""category":"color""#));
        assert!(json.contains(r#""suggested_action":"fix_input""#));
    }

    #[test]
    fn test_format_error_human() {
        let err = Error::InvalidColor("\"teal\"".into());
        let formatted = format_error_human(&err, false);

        assert!(formatted.contains("Invalid Color"));
        assert!(formatted.contains("invalid color: \"teal\""));
        assert!(formatted.contains("oklch(60% 0.18 262)"));
    }

    #[test]
    fn test_display_impls() {
        assert_eq!(ErrorCategory::Io.to_string(), "io");
        assert_eq!(SuggestedAction::RunCheck.to_string(), "run_check");
    }
}
