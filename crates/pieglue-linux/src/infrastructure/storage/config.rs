//! TOML-based configuration for the `pieglue` binary.
//!
//! The file lives at `$XDG_CONFIG_HOME/pieglue/config.toml`, falling back to
//! `~/.config/pieglue/config.toml` when `XDG_CONFIG_HOME` is unset.  A missing
//! file is not an error: every setting has a default.
//!
//! ```toml
//! [general]
//! log_level = "info"
//!
//! [hyprctl]
//! program = "hyprctl"
//! timeout_ms = 2000
//!
//! [keys]
//! stroke_delay_ms = 10
//! ```
//!
//! # Serde default values (for beginners)
//!
//! Every section carries `#[serde(default)]` and every field a
//! `#[serde(default = "...")]` helper, so a file that only sets
//! `hyprctl.program` is just as valid as an empty one.  Unknown keys are
//! ignored, which keeps older binaries working with newer files.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `XDG_CONFIG_HOME` nor `HOME` is set.
    #[error("could not determine the config directory")]
    NoConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A config file already exists and overwriting was not requested.
    #[error("config file {0} already exists")]
    AlreadyExists(PathBuf),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub hyprctl: HyprctlConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}

/// Process-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// How the Hyprland control tool is invoked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HyprctlConfig {
    /// Executable name or path.
    #[serde(default = "default_program")]
    pub program: String,
    /// Upper bound for a single query, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

/// Key simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeysConfig {
    /// Delay between strokes when a hotkey string is expanded.
    #[serde(default = "default_stroke_delay_ms")]
    pub stroke_delay_ms: u64,
}

impl HyprctlConfig {
    /// The query timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_program() -> String {
    "hyprctl".to_string()
}
fn default_timeout_ms() -> u64 {
    2_000
}
fn default_stroke_delay_ms() -> u64 {
    10
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for HyprctlConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for KeysConfig {
    fn default() -> Self {
        Self {
            stroke_delay_ms: default_stroke_delay_ms(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// The directory holding `config.toml`.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] if neither `XDG_CONFIG_HOME` nor
/// `HOME` is set.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .map(|base| base.join("pieglue"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Full path of the default config file.
///
/// # Errors
///
/// See [`config_dir`].
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads the config from its default location.
///
/// # Errors
///
/// See [`load_config_from`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads the config from `path`, returning defaults if the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the default configuration to `path` so it can be edited by hand.
///
/// # Errors
///
/// Returns [`ConfigError::AlreadyExists`] if `path` exists and `overwrite` is
/// `false`, otherwise the errors of [`save_config_to`].
pub fn write_default_config(path: &Path, overwrite: bool) -> Result<(), ConfigError> {
    if !overwrite && path.exists() {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }
    save_config_to(path, &AppConfig::default())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
