//! Global configuration for homestack
//!
//! Homestack reads one optional user-wide configuration file,
//! `~/.homestack/config.toml`, holding the defaults for where the service
//! catalog lives and where installed services are registered:
//!
//! ```toml
//! catalog = "~/stacks/catalog.toml"
//! state_dir = "~/.homestack/services"
//! ```
//!
//! A missing file is not an error; every field has a built-in default.
//! Configured paths may use `~`, expanded at read time. CLI flags and their
//! environment variables (`HOMESTACK_CATALOG`, `HOMESTACK_STATE_DIR`) take
//! precedence over the file.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::HomestackError;

/// User-wide configuration loaded from `~/.homestack/config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GlobalConfig {
    /// Path to the service catalog file.
    #[serde(default)]
    pub catalog: Option<String>,

    /// Directory where installed services are registered.
    #[serde(default)]
    pub state_dir: Option<String>,
}

impl GlobalConfig {
    /// The default location of the config file, if a home directory exists.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".homestack").join("config.toml"))
    }

    /// Load the configuration from its default location.
    ///
    /// Returns defaults when the file (or the home directory itself) does
    /// not exist.
    ///
    /// # Errors
    ///
    /// [`HomestackError::ConfigError`] if the file exists but cannot be
    /// read or parsed.
    pub fn load() -> Result<Self, HomestackError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, HomestackError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| HomestackError::ConfigError {
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| HomestackError::ConfigError {
            message: format!("invalid config file {}: {e}", path.display()),
        })?;

        debug!(path = %path.display(), "loaded global config");
        Ok(config)
    }

    /// The configured catalog path with `~` expanded.
    #[must_use]
    pub fn catalog_path(&self) -> Option<PathBuf> {
        self.catalog.as_deref().map(expand)
    }

    /// The configured state directory with `~` expanded.
    #[must_use]
    pub fn state_dir_path(&self) -> Option<PathBuf> {
        self.state_dir.as_deref().map(expand)
    }
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
