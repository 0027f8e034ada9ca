//! Persistent settings
//!
//! Stored with `confy` under the `totem-forge` application name. Anything
//! left unset falls back to built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use totem_types::Direction;

use crate::catalog::default_catalog_dir;
use crate::share::DEFAULT_NAME;
use crate::template::{TemplateError, TemplateSet};

pub const APP_NAME: &str = "totem-forge";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[source] confy::ConfyError),
    #[error("Failed to store config: {0}")]
    Store(#[source] confy::ConfyError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForgeConfig {
    /// Directory holding the catalog JSON files
    pub catalog_dir: Option<PathBuf>,
    /// Directory holding `templates.json` (None = built-in templates)
    pub template_dir: Option<PathBuf>,
    /// Direction for new totems
    pub default_direction: Direction,
    /// Name for new totems
    pub default_name: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            catalog_dir: None,
            template_dir: None,
            default_direction: Direction::default(),
            default_name: DEFAULT_NAME.to_string(),
        }
    }
}

impl ForgeConfig {
    /// Load from the user config directory, falling back to defaults
    pub fn load() -> Self {
        match confy::load(APP_NAME, None) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        confy::load_path(path).map_err(ConfigError::Load)
    }

    pub fn store(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, self).map_err(ConfigError::Store)
    }

    pub fn store_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(ConfigError::Store)
    }

    /// Configured catalog directory, else the default data location
    pub fn catalog_dir(&self) -> Option<PathBuf> {
        self.catalog_dir.clone().or_else(default_catalog_dir)
    }

    /// Template assets from `template_dir`, or the built-in set
    pub fn templates(&self) -> Result<TemplateSet, TemplateError> {
        match &self.template_dir {
            Some(dir) => TemplateSet::load(dir),
            None => Ok(TemplateSet::builtin()),
        }
    }
}
