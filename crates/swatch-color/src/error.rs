//! Color parsing and range errors.

use thiserror::Error;

use crate::validate::ColorIssue;

/// Errors produced by the color core.
///
/// Conversions between well-typed values never fail; only textual input
/// (hex, CSS `oklch(...)`) and explicit range enforcement produce errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    #[error("invalid color format {input:?}: {reason}")]
    InvalidFormat { input: String, reason: String },

    #[error("color out of range: {}", join_issues(.violations))]
    OutOfRange { violations: Vec<ColorIssue> },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str, reason: impl Into<String>) -> Self {
        ColorError::InvalidFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    /// Stable error code for structured reporting.
    pub fn code(&self) -> u32 {
        match self {
            ColorError::InvalidFormat { .. } => 30,
            ColorError::OutOfRange { .. } => 31,
        }
    }
}

fn join_issues(issues: &[ColorIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
