use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    #[diagnostic(
        code(hireflux::config::read_failed),
        help("Check the path passed with --config or the HFX_CONFIG environment variable.")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config in {path}: {message}")]
    #[diagnostic(code(hireflux::config::parse_failed))]
    Parse { path: PathBuf, message: String },

    #[error("Invalid default sort token '{token}'")]
    #[diagnostic(
        code(hireflux::config::invalid_sort),
        help("Use <column>_asc or <column>_desc, e.g. created_at_desc.")
    )]
    InvalidSort { token: String },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
