//! swatch common types and errors.
//!
//! This crate provides foundational types shared across the swatch crates:
//! - The unified error type with stable codes
//! - Output formats
//! - Schema versioning for JSON payloads

pub mod error;
pub mod output;

pub use error::{format_error_human, Error, ErrorCategory, Result, StructuredError, SuggestedAction};
pub use output::OutputFormat;

/// Version of the JSON payloads emitted by the CLI.
pub const SCHEMA_VERSION: &str = "1.0.0";
