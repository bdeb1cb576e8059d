//! Exit codes for the swatch CLI.
//!
//! Exit codes communicate the outcome without requiring output parsing, so
//! CI can gate on `swatch check` directly.
//!
//! Exit code ranges:
//! - 0-2: Operational outcomes (the command ran; the code says what it found)
//! - 10-19: User/environment errors (recoverable by user action)
//! - 20-29: Internal errors (bugs, should be reported)

use swatch_common::Error;

/// Exit codes for swatch operations.
///
/// These codes are a stable contract for automation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    // ========================================================================
    // Operational Outcomes (0-2)
    // ========================================================================
    /// Nothing to report
    Clean = 0,

    /// Accessibility advisories present; colors are still valid
    Advisories = 1,

    /// At least one contrast pair fails WCAG AA
    ContrastWarnings = 2,

    // ========================================================================
    // User / Environment Errors (10-19)
    // ========================================================================
    /// Invalid arguments (including unparseable colors)
    ArgsError = 10,

    /// Config file missing or unreadable as YAML
    ConfigError = 11,

    /// Colors or content fail validation
    ValidationError = 12,

    // ========================================================================
    // Internal Errors (20-29)
    // ========================================================================
    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Check if this exit code indicates success (codes 0-2).
    pub fn is_success(self) -> bool {
        (self as i32) < 10
    }

    /// Check if this exit code is a user/environment error (codes 10-19).
    pub fn is_user_error(self) -> bool {
        let code = self as i32;
        (10..20).contains(&code)
    }

    /// Check if this exit code is an internal error (codes 20-29).
    pub fn is_internal_error(self) -> bool {
        (self as i32) >= 20
    }

    /// Get the code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK_CLEAN",
            ExitCode::Advisories => "OK_ADVISORIES",
            ExitCode::ContrastWarnings => "OK_CONTRAST_WARNINGS",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ConfigError => "ERR_CONFIG",
            ExitCode::ValidationError => "ERR_VALIDATION",
            ExitCode::InternalError => "ERR_INTERNAL",
            ExitCode::IoError => "ERR_IO",
        }
    }

    /// Map a unified error to the exit code the CLI reports for it.
    pub fn for_error(err: &Error) -> Self {
        match err {
            Error::InvalidColor(_) => ExitCode::ArgsError,
            Error::ColorOutOfRange(_) | Error::InvalidContent(_) | Error::InvalidSiteConfig(_) => {
                ExitCode::ValidationError
            }
            Error::ConfigNotFound { .. } | Error::Yaml(_) => ExitCode::ConfigError,
            Error::Io(_) => ExitCode::IoError,
            Error::Json(_) => ExitCode::InternalError,
        }
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code_name(), self.as_i32())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges() {
        assert!(ExitCode::Clean.is_success());
        assert!(ExitCode::ContrastWarnings.is_success());
        assert!(ExitCode::ConfigError.is_user_error());
        assert!(!ExitCode::IoError.is_user_error());
        assert!(ExitCode::IoError.is_internal_error());
    }

    #[test]
    fn test_display() {
        assert_eq!(ExitCode::ValidationError.to_string(), "ERR_VALIDATION (12)");
        assert_eq!(i32::from(ExitCode::Advisories), 1);
    }

    #[test]
    fn test_for_error() {
        assert_eq!(
            ExitCode::for_error(&Error::InvalidColor("x".into())),
            ExitCode::ArgsError
        );
        assert_eq!(
            ExitCode::for_error(&Error::ColorOutOfRange("x".into())),
            ExitCode::ValidationError
        );
        assert_eq!(
            ExitCode::for_error(&Error::Yaml("x".into())),
            ExitCode::ConfigError
        );
    }
}
