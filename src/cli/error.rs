use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error("Failed to read {path}")]
    #[diagnostic(code(hireflux::cli::read_failed))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}")]
    #[diagnostic(
        code(hireflux::cli::invalid_json),
        help("The input file must contain a JSON array of records.")
    )]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON array in {path}")]
    #[diagnostic(
        code(hireflux::cli::not_an_array),
        help("Wrap the records in [ ... ].")
    )]
    NotAnArray { path: PathBuf },

    #[error("Invalid parameter '{raw}'")]
    #[diagnostic(
        code(hireflux::cli::invalid_param),
        help("Parameters are written as key=value, e.g. --set status=archived")
    )]
    InvalidParam { raw: String },

    #[error("Invalid sort token '{token}'")]
    #[diagnostic(
        code(hireflux::cli::invalid_sort),
        help("Use <column>_asc or <column>_desc; the column is everything before the last underscore.")
    )]
    InvalidSortToken { token: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(hireflux::cli::output))]
    Output { message: String },
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
