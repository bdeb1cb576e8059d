//! Output formats for CLI commands.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported output formats for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON (default, for editor front-ends and scripts)
    #[default]
    Json,

    /// Human-readable Markdown
    Md,

    /// One-line summary for quick status checks
    Summary,

    /// Minimal output (exit code only)
    Exitcode,
}

impl OutputFormat {
    /// Whether stdout should carry a machine-readable payload.
    pub fn is_machine(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Md => write!(f, "md"),
            OutputFormat::Summary => write!(f, "summary"),
            OutputFormat::Exitcode => write!(f, "exitcode"),
        }
    }
}
