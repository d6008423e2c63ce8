//! Column sort engine.
//!
//! [`ColumnSort`] holds the active [`SortState`] and the per-column
//! comparators. It never owns or mutates the list: [`ColumnSort::sorted_items`]
//! returns a sorted view of borrowed items.
//!
//! # Example
//! ```
//! use hireflux::sort::{ColumnSort, SortDirection};
//! use serde_json::json;
//!
//! let jobs = vec![json!({"title": "b"}), json!({"title": "a"})];
//! let mut sort = ColumnSort::unsorted();
//! sort.toggle_sort("title");
//!
//! let sorted = sort.sorted_items(&jobs);
//! assert_eq!(sorted[0]["title"], "a");
//! assert_eq!(sort.state().direction(), SortDirection::Asc);
//! ```

mod compare;
mod token;

#[cfg(test)]
mod compare_test;
#[cfg(test)]
mod sort_test;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::field::FieldAccess;

pub use compare::{compare_values, locale_compare, parse_date_like};
pub use token::{format_sort_value, parse_sort_value};

/// Sort direction. `None` means the list is shown in its input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
    #[default]
    None,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
            SortDirection::None => "none",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            "none" => Some(SortDirection::None),
            _ => None,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active sort. A column is set if and only if the direction is not `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    column: Option<String>,
    direction: SortDirection,
}

impl SortState {
    /// Build a sort state, collapsing to unsorted when `direction` is `None`
    /// or the column name is empty.
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        let column = column.into();
        if direction == SortDirection::None || column.is_empty() {
            return Self::unsorted();
        }
        Self {
            column: Some(column),
            direction,
        }
    }

    pub fn unsorted() -> Self {
        Self {
            column: None,
            direction: SortDirection::None,
        }
    }

    pub fn column(&self) -> Option<&str> {
        self.column.as_deref()
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_sorted(&self) -> bool {
        self.column.is_some()
    }
}

/// Custom ordering for one column.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

pub struct ColumnSort<T> {
    state: SortState,
    default_sort: SortState,
    comparators: HashMap<String, Comparator<T>>,
}

impl<T> ColumnSort<T> {
    pub fn new(default_sort: SortState) -> Self {
        Self {
            state: default_sort.clone(),
            default_sort,
            comparators: HashMap::new(),
        }
    }

    pub fn unsorted() -> Self {
        Self::new(SortState::unsorted())
    }

    /// Register a comparator for `column`, replacing the default comparator.
    pub fn with_comparator<F>(mut self, column: impl Into<String>, compare: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        self.comparators.insert(column.into(), Box::new(compare));
        self
    }

    pub fn state(&self) -> &SortState {
        &self.state
    }

    pub fn default_sort(&self) -> &SortState {
        &self.default_sort
    }

    pub fn has_comparator(&self, column: &str) -> bool {
        self.comparators.contains_key(column)
    }

    /// Cycle ascending, descending, unsorted on the same column. A different
    /// column always starts at ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        let next = match (self.state.column(), self.state.direction()) {
            (Some(current), SortDirection::Asc) if current == column => {
                SortState::new(column, SortDirection::Desc)
            }
            (Some(current), SortDirection::Desc) if current == column => SortState::unsorted(),
            _ => SortState::new(column, SortDirection::Asc),
        };
        debug!(
            column,
            direction = %next.direction(),
            "toggled sort"
        );
        self.state = next;
    }

    pub fn set_sort(&mut self, column: &str, direction: SortDirection) {
        self.state = SortState::new(column, direction);
    }

    pub fn set_state(&mut self, state: SortState) {
        self.state = state;
    }

    pub fn clear_sort(&mut self) {
        self.state = SortState::unsorted();
    }

    /// Return to the sort this engine was constructed with.
    pub fn reset(&mut self) {
        self.state = self.default_sort.clone();
    }
}

impl<T: FieldAccess> ColumnSort<T> {
    /// Compare two items by the active column in ascending order.
    fn compare_by(&self, column: &str, a: &T, b: &T) -> Ordering {
        match self.comparators.get(column) {
            Some(compare) => compare(a, b),
            None => compare_values(&a.field(column), &b.field(column)),
        }
    }

    /// Stable sort of `items` under the active state. Unsorted state keeps
    /// the input order.
    pub fn sorted_items<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut sorted: Vec<&T> = items.iter().collect();
        self.sort_view(&mut sorted);
        sorted
    }

    /// Sort an already borrowed view in place, e.g. the output of a filter.
    pub fn sort_view(&self, view: &mut [&T]) {
        let Some(column) = self.state.column() else {
            return;
        };
        match self.state.direction() {
            SortDirection::Asc => view.sort_by(|a, b| self.compare_by(column, a, b)),
            SortDirection::Desc => view.sort_by(|a, b| self.compare_by(column, a, b).reverse()),
            SortDirection::None => {}
        }
    }
}

impl<T> Default for ColumnSort<T> {
    fn default() -> Self {
        Self::unsorted()
    }
}
