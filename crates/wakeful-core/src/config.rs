//! JSON-based configuration record and persistence.
//!
//! Reads and writes [`SimulationConfig`] to the platform-appropriate config
//! file:
//! - Windows:  `%APPDATA%\Wakeful\config.json`
//! - Linux:    `$XDG_CONFIG_HOME/wakeful/config.json` (or `~/.config/wakeful/`)
//! - macOS:    `~/Library/Application Support/Wakeful/config.json`
//!
//! The on-disk object is flat, with short historical key names (`cpm`,
//! `mouse_interval`) mapped onto the struct fields via `#[serde(rename)]`.
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the key is absent from the file.  This keeps the app
//! working on first run and when loading a config written by an older
//! version that lacks newer fields.
//!
//! Configuration loading is never fatal: a missing or malformed file yields
//! the defaults with a log line, per the contract that the simulator must
//! always be startable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// File name of the persisted configuration.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config could not be serialized to JSON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Per-run simulation settings.
///
/// Immutable once handed to a [`crate::Simulator`]: changing behaviour means
/// constructing a new config and a new simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Keyboard presses per minute.  `0` disables the keyboard worker.
    #[serde(rename = "cpm", default = "default_cpm")]
    pub clicks_per_minute: u32,

    /// Symbolic name of the key to press, forwarded opaquely to the injector.
    #[serde(default = "default_key")]
    pub key: String,

    /// Master switch for the mouse worker.
    #[serde(rename = "mouse_enable", default = "default_true")]
    pub mouse_enabled: bool,

    /// Seconds between mouse nudges.  `0` (or disabled) means no mouse worker.
    #[serde(rename = "mouse_interval", default = "default_mouse_interval")]
    pub mouse_interval_seconds: f64,

    /// Whether ±10% timing jitter is applied between actions.
    #[serde(default)]
    pub randomize_interval: bool,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_cpm() -> u32 {
    120
}
fn default_key() -> String {
    "space".to_string()
}
fn default_true() -> bool {
    true
}
fn default_mouse_interval() -> f64 {
    5.0
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            clicks_per_minute: default_cpm(),
            key: default_key(),
            mouse_enabled: default_true(),
            mouse_interval_seconds: default_mouse_interval(),
            randomize_interval: false,
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads a [`SimulationConfig`] from `path`.
///
/// Never fails: a missing file yields the defaults silently, and an
/// unreadable or malformed file yields the defaults with a warning.  Missing
/// fields fall back individually via their serde defaults; unknown fields
/// are ignored.
pub fn load_config(path: &Path) -> SimulationConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("invalid config at {}: {e}; using defaults", path.display());
                SimulationConfig::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no config file at {}; using defaults", path.display());
            SimulationConfig::default()
        }
        Err(e) => {
            warn!("could not read config at {}: {e}; using defaults", path.display());
            SimulationConfig::default()
        }
    }
}

/// Persists `config` to `path` as pretty-printed JSON.
///
/// Creates the parent directory if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(path: &Path, config: &SimulationConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory plus the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Wakeful"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Wakeful")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("wakeful"))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
