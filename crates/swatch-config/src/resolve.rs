//! Configuration resolution and path discovery.
//!
//! Resolution order: CLI argument → environment variables → working
//! directory → XDG path → built-in default.

use std::path::{Path, PathBuf};

use tracing::debug;

/// The discovered configuration file.
#[derive(Debug, Clone, Default)]
pub struct ConfigPath {
    /// Path to the site config (or None if nothing was found).
    pub path: Option<PathBuf>,

    /// Where it came from (for diagnostics).
    pub source: ConfigSource,
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly provided via CLI argument.
    CliArgument,

    /// Set via environment variable.
    Environment,

    /// Found in the current working directory.
    WorkingDirectory,

    /// Found in XDG config directory.
    XdgConfig,

    /// Using built-in defaults.
    #[default]
    BuiltinDefault,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::CliArgument => write!(f, "CLI argument"),
            ConfigSource::Environment => write!(f, "environment variable"),
            ConfigSource::WorkingDirectory => write!(f, "working directory"),
            ConfigSource::XdgConfig => write!(f, "XDG config"),
            ConfigSource::BuiltinDefault => write!(f, "builtin default"),
        }
    }
}

/// Environment variable names.
pub const ENV_CONFIG_PATH: &str = "SWATCH_CONFIG";
pub const ENV_SITE_DIR: &str = "SWATCH_SITE_DIR";

/// Standard config file name.
pub const CONFIG_FILENAME: &str = "config.yaml";

/// Application name for XDG directories.
const APP_NAME: &str = "swatch";

/// Resolve the site configuration path.
///
/// 1. Explicit CLI path. Returned even if it does not exist, so the
///    caller reports the missing file instead of silently falling back.
/// 2. `SWATCH_CONFIG` (direct path)
/// 3. `SWATCH_SITE_DIR` + `config.yaml`
/// 4. `./config.yaml`
/// 5. XDG config directory (`~/.config/swatch/config.yaml`)
/// 6. Built-in default (None)
pub fn resolve_config(cli_path: Option<&Path>) -> ConfigPath {
    let resolved = resolve_inner(cli_path);
    debug!(
        path = ?resolved.path,
        source = %resolved.source,
        "resolved site config"
    );
    resolved
}

fn resolve_inner(cli_path: Option<&Path>) -> ConfigPath {
    // 1. CLI argument
    if let Some(path) = cli_path {
        return found(path.to_path_buf(), ConfigSource::CliArgument);
    }

    // 2. Environment variable (direct path)
    if let Ok(env_path) = std::env::var(ENV_CONFIG_PATH) {
        let path = PathBuf::from(env_path);
        if path.exists() {
            return found(path, ConfigSource::Environment);
        }
    }

    // 3. Environment variable (site dir)
    if let Ok(site_dir) = std::env::var(ENV_SITE_DIR) {
        let path = PathBuf::from(site_dir).join(CONFIG_FILENAME);
        if path.exists() {
            return found(path, ConfigSource::Environment);
        }
    }

    // 4. Working directory
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.exists() {
        return found(local, ConfigSource::WorkingDirectory);
    }

    // 5. XDG config directory
    if let Some(dir) = xdg_config_dir() {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            return found(path, ConfigSource::XdgConfig);
        }
    }

    // 6. Built-in default
    ConfigPath::default()
}

fn found(path: PathBuf, source: ConfigSource) -> ConfigPath {
    ConfigPath {
        path: Some(path),
        source,
    }
}

/// Get the XDG config directory for swatch.
pub fn xdg_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_NAME))
}
