//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treevis/treevis.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `TREEVIS_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::util::path::expand_path;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("config error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("invalid setting {key}: {message}")]
    Invalid { key: &'static str, message: String },

    #[error("cannot serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Unified configuration for treevis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Reduce the red-node product modulo this value (must be > 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_modulus: Option<i64>,
    /// Run the three visitors on the rayon pool
    pub parallel: bool,
    /// Print the rendered tree to stderr before the statistics
    pub show_tree: bool,
}

/// Get the XDG config directory for treevis.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treevis").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treevis.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; `~` and `$VAR` are expanded.
    ///   Unlike the global file it must exist.
    pub fn load(config_file: Option<&Path>) -> SettingsResult<Self> {
        Self::load_layers(global_config_path().as_deref(), config_file)
    }

    #[instrument(level = "debug")]
    pub fn load_layers(global: Option<&Path>, config_file: Option<&Path>) -> SettingsResult<Self> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("parallel", defaults.parallel)?
            .set_default("show_tree", defaults.show_tree)?;

        // 2. Global config (optional)
        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        // 3. Explicit config file (required)
        if let Some(path) = config_file {
            let expanded = expand_path(path);
            if !expanded.exists() {
                return Err(SettingsError::NotFound(expanded));
            }
            debug!("config file: {}", expanded.display());
            builder = builder.add_source(File::from(expanded).required(true));
        }

        // 4. Environment overrides: `TREEVIS_PRODUCT_MODULUS`, nested keys split on `__`
        builder = builder.add_source(
            Environment::with_prefix("TREEVIS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> SettingsResult<()> {
        if let Some(m) = self.product_modulus {
            if m <= 0 {
                return Err(SettingsError::Invalid {
                    key: "product_modulus",
                    message: format!("must be positive, got {}", m),
                });
            }
        }
        Ok(())
    }

    pub fn to_toml(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
