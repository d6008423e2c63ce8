//! Debounced search state.
//!
//! [`Search`] keeps two values: the text as typed and the settled query that
//! downstream filtering uses. Every [`Search::set_query`] restarts the
//! debounce window; the settled query only moves when the host calls
//! [`Search::poll`] after the window has elapsed without further typing.
//!
//! # Example
//! ```
//! use std::time::{Duration, Instant};
//! use hireflux::search::Search;
//!
//! let start = Instant::now();
//! let mut search = Search::new("", Duration::from_millis(300), |q: &str| {
//!     println!("searching for {q}");
//! });
//!
//! search.set_query("rust", start);
//! assert!(search.is_debouncing());
//! assert_eq!(search.debounced_query(), "");
//!
//! search.poll(start + Duration::from_millis(300));
//! assert_eq!(search.debounced_query(), "rust");
//! ```

mod filter;


use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::timer::Timer;

pub use filter::{filter_items, matches_query};

/// Called with the settled query each time it changes.
pub type OnSearch = Box<dyn FnMut(&str)>;

pub struct Search {
    query: String,
    debounced_query: String,
    debounce: Duration,
    timer: Timer,
    on_search: OnSearch,
}

/// Shorthand for [`Search::new`].
pub fn create_search<F>(initial_query: &str, debounce: Duration, on_search: F) -> Search
where
    F: FnMut(&str) + 'static,
{
    Search::new(initial_query, debounce, on_search)
}

impl Search {
    pub fn new<F>(initial_query: &str, debounce: Duration, on_search: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        Self {
            query: initial_query.to_string(),
            debounced_query: initial_query.to_string(),
            debounce,
            timer: Timer::new(),
            on_search: Box::new(on_search),
        }
    }

    /// The text as typed, updated synchronously.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The last settled query.
    pub fn debounced_query(&self) -> &str {
        &self.debounced_query
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// True while a settle is pending for a value that differs from the settled one.
    pub fn is_debouncing(&self) -> bool {
        self.timer.is_armed() && self.query != self.debounced_query
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    /// Update the typed text and restart the debounce window.
    ///
    /// Typing back to the settled value cancels the pending settle.
    pub fn set_query(&mut self, value: impl Into<String>, now: Instant) {
        self.query = value.into();
        if self.query == self.debounced_query {
            self.timer.cancel();
            return;
        }
        self.timer.arm(now, self.debounce);
    }

    /// Reset both values to empty and notify immediately, bypassing the debounce.
    pub fn clear_search(&mut self) {
        self.timer.cancel();
        self.query.clear();
        self.debounced_query.clear();
        debug!("search cleared");
        (self.on_search)("");
    }

    /// Settle the query if the debounce window elapsed.
    ///
    /// Returns the newly settled query when the callback fired.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        if !self.timer.fire_if_due(now) {
            return None;
        }
        self.debounced_query = self.query.clone();
        debug!(query = %self.debounced_query, "search settled");
        (self.on_search)(&self.debounced_query);
        Some(&self.debounced_query)
    }

    /// Cancel any pending settle. The settled query is left as is.
    pub fn teardown(&mut self) {
        if self.timer.cancel() {
            debug!("search torn down with a pending settle");
        }
    }
}

impl fmt::Debug for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search")
            .field("query", &self.query)
            .field("debounced_query", &self.debounced_query)
            .field("debounce", &self.debounce)
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

impl Drop for Search {
    fn drop(&mut self) {
        self.teardown();
    }
}
