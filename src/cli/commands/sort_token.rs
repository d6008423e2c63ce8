use crate::cli::error::{CliError, CliResult};
use crate::sort::parse_sort_value;

/// Describe how a `<column>_<direction>` token is interpreted.
pub fn describe_sort_token(token: &str) -> CliResult<String> {
    let state = parse_sort_value(token).ok_or_else(|| CliError::InvalidSortToken {
        token: token.to_string(),
    })?;
    Ok(format!(
        "column: {}\ndirection: {}",
        state.column().unwrap_or_default(),
        state.direction()
    ))
}
