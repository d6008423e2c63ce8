//! Toolkit configuration.
//!
//! Every field is optional; missing values fall back to the defaults the
//! list pages use (300ms search debounce, 100ms URL flush, 10 items per
//! page). Files ending in `.json` are read as JSON, anything else as YAML.
//!
//! Lookup order:
//! 1. Explicit path
//! 2. `HFX_CONFIG` environment variable
//! 3. Built-in defaults

mod error;


use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::list::ListOptions;
use crate::sort::{SortState, parse_sort_value};
use crate::url_state::UrlParamConfig;

pub use error::{ConfigError, ConfigResult};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "HFX_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolkitConfig {
    pub search: SearchConfig,
    pub url: UrlConfig,
    pub pagination: PaginationConfig,
    pub sort: SortConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    pub debounce_ms: u64,
    /// Fields the search query is matched against.
    pub fields: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            fields: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UrlConfig {
    pub flush_delay_ms: u64,
    /// Managed parameters and their defaults.
    pub params: UrlParamConfig,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            flush_delay_ms: 100,
            params: UrlParamConfig::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationConfig {
    pub items_per_page: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { items_per_page: 10 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    /// Default sort token, e.g. `created_at_desc`.
    pub default: Option<String>,
}

impl ToolkitConfig {
    /// Load from `path`, then `HFX_CONFIG`, falling back to defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| env::var(CONFIG_ENV).ok().map(PathBuf::from));

        match path {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let parse_error = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };
        let config: Self = if is_json {
            serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
        } else {
            serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))?
        };

        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        self.default_sort().map(|_| ())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn flush_delay(&self) -> Duration {
        Duration::from_millis(self.url.flush_delay_ms)
    }

    pub fn url_params(&self) -> UrlParamConfig {
        self.url.params.clone()
    }

    pub fn default_sort(&self) -> ConfigResult<SortState> {
        match self.sort.default.as_deref() {
            None | Some("") => Ok(SortState::unsorted()),
            Some(token) => parse_sort_value(token).ok_or_else(|| ConfigError::InvalidSort {
                token: token.to_string(),
            }),
        }
    }

    /// Options for a [`crate::list::ListController`] built from this config.
    pub fn list_options(&self) -> ConfigResult<ListOptions> {
        Ok(ListOptions {
            debounce: self.debounce(),
            flush_delay: self.flush_delay(),
            items_per_page: self.pagination.items_per_page,
            default_sort: self.default_sort()?,
            search_fields: self.search.fields.clone(),
            ..ListOptions::default()
        })
    }
}
