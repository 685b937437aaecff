//! Dalil configuration
//!
//! ## Configuration Sources (in precedence order)
//!
//! 1. An explicit path (`--config`)
//! 2. `.dalil/config.yaml` - Project-level config
//! 3. `<config dir>/dalil/config.yaml` - Global config
//! 4. Built-in defaults
//!
//! ```yaml
//! catalog: ./data/catalog.yaml
//! shareBaseUrl: https://dalil.example.dz
//! downloadFormat: pdf
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::detail::DetailConfig;

/// Project-level config location, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = ".dalil/config.yaml";

const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DalilConfig {
    /// Catalog file to load; the built-in sample is used when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Origin used to build share links
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,

    /// Format requested by download actions
    #[serde(default = "default_download_format")]
    pub download_format: String,
}

fn default_share_base_url() -> String {
    DetailConfig::default().share_base_url
}

fn default_download_format() -> String {
    DetailConfig::default().download_format
}

impl Default for DalilConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            share_base_url: default_share_base_url(),
            download_format: default_download_format(),
        }
    }
}

impl DalilConfig {
    /// Parse a YAML config document
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        serde_yaml_ng::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a config file
    ///
    /// A relative `catalog` path is resolved against the file's directory.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_yaml(&content, path)?;
        if let (Some(catalog), Some(base)) = (&config.catalog, path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(base.join(catalog));
            }
        }

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Resolve configuration from the standard locations
    ///
    /// An explicit path must exist. Otherwise the first existing file among
    /// the project and global locations wins, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let candidates = [Some(PathBuf::from(PROJECT_CONFIG_PATH)), global_config_path()];
        for candidate in candidates.into_iter().flatten() {
            if candidate.is_file() {
                return Self::load_from_path(&candidate);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Settings for the detail synthesizer
    pub fn detail_config(&self) -> DetailConfig {
        DetailConfig {
            share_base_url: self.share_base_url.clone(),
            download_format: self.download_format.clone(),
        }
    }
}

/// Global config file location, if the platform has a config directory
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("dz", "dalil", "dalil")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = DalilConfig::default();
        assert_eq!(config.catalog, None);
        assert_eq!(config.detail_config(), DetailConfig::default());
    }

    #[test]
    fn test_partial_document_uses_defaults() {
        let config =
            DalilConfig::from_yaml("downloadFormat: docx\n", Path::new("config.yaml")).unwrap();
        assert_eq!(config.download_format, "docx");
        assert_eq!(config.share_base_url, "https://dalil.local");
    }

    #[test]
    fn test_relative_catalog_resolved_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "catalog: data/catalog.yaml\n").unwrap();

        let config = DalilConfig::load_from_path(&path).unwrap();
        assert_eq!(config.catalog, Some(dir.path().join("data/catalog.yaml")));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(matches!(
            DalilConfig::load(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "shareBaseUrl: [unclosed\n").unwrap();

        let err = DalilConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.yaml"));
    }
}
