//! Application configuration management.
//!
//! Settings are layered with figment, later layers winning:
//!
//! 1. Built-in defaults
//! 2. TOML config file (`--config FILE` or `CHECKSUMS2DUPS_CONFIG`, else
//!    `config.toml` in the platform config directory when present)
//! 3. Environment variables prefixed with `CHECKSUMS2DUPS_`
//! 4. CLI flags, applied by the caller
//!
//! # Example
//!
//! ```toml
//! json_indent = 2
//! normalize_unicode = true
//! keep_going = false
//! ```

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::output::json::DEFAULT_INDENT;

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "CHECKSUMS2DUPS_";

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A layer held invalid values.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] figment::Error),
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Spaces per indentation level in JSON output.
    pub json_indent: usize,
    /// Fold path segments to Unicode NFC before building the tree.
    pub normalize_unicode: bool,
    /// Continue with remaining manifests after one fails.
    pub keep_going: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json_indent: DEFAULT_INDENT,
            normalize_unicode: false,
            keep_going: false,
        }
    }
}

impl Config {
    /// Load the layered configuration.
    ///
    /// `explicit` must exist if given; otherwise the platform config file is
    /// used when present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicit file is missing or any layer
    /// holds invalid values.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Config = Self::figment(explicit)?.extract()?;
        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Build the figment for the default, file and environment layers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if `explicit` does not exist.
    pub fn figment(explicit: Option<&Path>) -> Result<Figment, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        let file = match explicit {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path(),
        };
        if let Some(file) = file {
            log::trace!("Reading config file {}", file.display());
            figment = figment.merge(Toml::file(file));
        }

        // `CHECKSUMS2DUPS_CONFIG` names the file and is read by the CLI.
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["config"])))
    }

    /// Platform-specific path of the default config file, if one can be derived.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "checksums2dups", "checksums2dups")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
