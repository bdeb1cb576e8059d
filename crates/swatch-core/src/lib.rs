//! swatch core library.
//!
//! Everything above the pure color math: the theme report shown by the
//! editor preview and `swatch check`, the editor session, CLI exit codes
//! and logging setup.

pub mod editor;
pub mod errors;
pub mod exit_codes;
pub mod logging;
pub mod report;

pub use editor::{EditorError, ThemeEditor};
pub use exit_codes::ExitCode;
pub use report::{ColorSummary, ContrastCheck, ThemeReport};
