//! `<column>_<direction>` tokens, as used by single-select sort dropdowns
//! and the `sort` URL parameter.

use super::{SortDirection, SortState};

/// Parse a sort token by splitting at the last underscore.
///
/// Column names may contain underscores (`avg_score_desc`). Returns `None`
/// for tokens without a column or with a direction other than `asc`/`desc`.
pub fn parse_sort_value(token: &str) -> Option<SortState> {
    let (column, direction) = token.trim().rsplit_once('_')?;
    if column.is_empty() {
        return None;
    }
    match SortDirection::parse(direction)? {
        SortDirection::None => None,
        direction => Some(SortState::new(column, direction)),
    }
}

/// Inverse of [`parse_sort_value`]. Unsorted state has no token.
pub fn format_sort_value(state: &SortState) -> Option<String> {
    state
        .column()
        .map(|column| format!("{}_{}", column, state.direction().as_str()))
}
