//! Runtime configuration.
//!
//! Values are resolved in this order, later steps winning:
//!
//! 1. built-in defaults
//! 2. a TOML file (explicit path, else `catalog-browser.toml` when present)
//! 3. `CATALOG_BROWSER_*` environment variables
//!
//! ```toml
//! [catalog]
//! path = "data/products.json"
//! asset_dir = "Assets/Product_Images"
//!
//! [session]
//! channel_capacity = 32
//! default_sort = "price_asc"
//!
//! [logging]
//! level = "debug"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::SortKey;

pub const DEFAULT_CONFIG_FILE: &str = "catalog-browser.toml";

#[derive(Clone, Debug, PartialEq)]
pub struct BrowserConfig {
    pub catalog: CatalogConfig,
    pub session: SessionConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogConfig {
    pub path: PathBuf,
    pub asset_dir: PathBuf,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub channel_capacity: usize,
    pub default_sort: SortKey,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig {
                path: PathBuf::from("data/products.json"),
                asset_dir: PathBuf::from("Assets/Product_Images"),
            },
            session: SessionConfig {
                channel_capacity: 32,
                default_sort: SortKey::NameAsc,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl BrowserConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match resolve_config_path(options.config_path.as_deref()) {
            Some(path) => config.apply_patch(read_patch(&path)?),
            None if options.require_file => {
                let expected = options
                    .config_path
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
                return Err(ConfigError::MissingConfigFile(expected));
            }
            None => {}
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "catalog.path must not be empty".to_string(),
            ));
        }
        if self.session.channel_capacity == 0 {
            return Err(ConfigError::Validation(
                "session.channel_capacity must be greater than zero".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(catalog) = patch.catalog {
            if let Some(path) = catalog.path {
                self.catalog.path = path;
            }
            if let Some(asset_dir) = catalog.asset_dir {
                self.catalog.asset_dir = asset_dir;
            }
        }

        if let Some(session) = patch.session {
            if let Some(channel_capacity) = session.channel_capacity {
                self.session.channel_capacity = channel_capacity;
            }
            if let Some(default_sort) = session.default_sort {
                self.session.default_sort = default_sort;
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("CATALOG_BROWSER_CATALOG_PATH") {
            self.catalog.path = PathBuf::from(value);
        }
        if let Some(value) = read_env("CATALOG_BROWSER_ASSET_DIR") {
            self.catalog.asset_dir = PathBuf::from(value);
        }
        if let Some(value) = read_env("CATALOG_BROWSER_CHANNEL_CAPACITY") {
            self.session.channel_capacity = value
                .trim()
                .parse::<usize>()
                .map_err(|_| invalid_override("CATALOG_BROWSER_CHANNEL_CAPACITY", &value))?;
        }
        if let Some(value) = read_env("CATALOG_BROWSER_DEFAULT_SORT") {
            self.session.default_sort = value
                .parse()
                .map_err(|_| invalid_override("CATALOG_BROWSER_DEFAULT_SORT", &value))?;
        }
        if let Some(value) = read_env("CATALOG_BROWSER_LOG_LEVEL") {
            self.logging.level = value;
        }
        Ok(())
    }
}

fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then(|| path.to_path_buf());
    }
    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    default_path.exists().then_some(default_path)
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;
    toml::from_str(&raw).map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn invalid_override(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigPatch {
    catalog: Option<CatalogPatch>,
    session: Option<SessionPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogPatch {
    path: Option<PathBuf>,
    asset_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SessionPatch {
    channel_capacity: Option<usize>,
    default_sort: Option<SortKey>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingPatch {
    level: Option<String>,
}
