//! URL parameter synchronizer.
//!
//! Mirrors a set of named string parameters into the address bar. Writes are
//! staged and flushed together once the coalescing delay passes, so a burst
//! of UI updates produces a single history replacement. Values equal to
//! their configured default are removed from the query string instead of
//! being written.
//!
//! # Example
//! ```
//! use std::time::{Duration, Instant};
//! use hireflux::url_state::{MemoryNavigator, UrlParamConfig, UrlState};
//!
//! let config = UrlParamConfig::new().with("status", "all");
//! let mut url = UrlState::new(
//!     MemoryNavigator::new("?status=archived"),
//!     config,
//!     Duration::from_millis(100),
//! );
//! assert_eq!(url.get_param("status"), "archived");
//!
//! let now = Instant::now();
//! url.set_param("status", "all", now);
//! url.poll(now + Duration::from_millis(100));
//! assert_eq!(url.navigator().history(), ["".to_string()]);
//! ```

mod navigator;
mod params;
mod pending;
mod query;


use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use tracing::{debug, instrument};

use crate::timer::Timer;

#[cfg(test)]
pub use navigator::MockNavigator;
pub use navigator::{MemoryNavigator, NavigateOptions, Navigator};
pub use params::UrlParamConfig;
pub use pending::PendingWrites;
pub use query::{QueryPairs, parse_query, serialize_query};

/// Coalescing window used when no delay is configured.
pub const DEFAULT_FLUSH_DELAY: Duration = Duration::from_millis(100);

pub struct UrlState<N: Navigator> {
    navigator: N,
    config: UrlParamConfig,
    current: QueryPairs,
    pending: PendingWrites,
    timer: Timer,
    flush_delay: Duration,
}

impl<N: Navigator> UrlState<N> {
    /// Read the initial parameter values from the navigator.
    pub fn new(navigator: N, config: UrlParamConfig, flush_delay: Duration) -> Self {
        let current = parse_query(&navigator.query_string());
        debug!(
            managed = config.len(),
            present = current.len(),
            "url state initialised"
        );
        Self {
            navigator,
            config,
            current,
            pending: PendingWrites::new(),
            timer: Timer::new(),
            flush_delay,
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    pub fn config(&self) -> &UrlParamConfig {
        &self.config
    }

    pub fn flush_delay(&self) -> Duration {
        self.flush_delay
    }

    /// Effective value: the address bar value if present and non-empty,
    /// otherwise the configured default.
    pub fn get_param(&self, key: &str) -> String {
        query::get_pair(&self.current, key)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| self.config.default_for(key))
            .to_string()
    }

    /// Effective values of every configured parameter.
    pub fn params(&self) -> BTreeMap<String, String> {
        self.config
            .keys()
            .map(|key| (key.to_string(), self.get_param(key)))
            .collect()
    }

    pub fn pending(&self) -> &PendingWrites {
        &self.pending
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.next_deadline()
    }

    /// Stage one write and restart the coalescing window.
    pub fn set_param(&mut self, key: &str, value: &str, now: Instant) {
        self.pending.stage(key, value);
        self.timer.arm(now, self.flush_delay);
    }

    /// Stage several writes and restart the coalescing window once.
    pub fn set_params<I, K, V>(&mut self, params: I, now: Instant)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in params {
            self.pending.stage(key, value);
        }
        self.timer.arm(now, self.flush_delay);
    }

    /// Stage every configured key back to its default.
    pub fn clear_params(&mut self, now: Instant) {
        let defaults: Vec<(String, String)> = self
            .config
            .keys()
            .map(|key| (key.to_string(), self.config.default_for(key).to_string()))
            .collect();
        self.set_params(defaults, now);
    }

    /// Flush if the coalescing window has elapsed. Returns true if the
    /// address bar was updated.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.timer.fire_if_due(now) {
            return false;
        }
        self.flush();
        true
    }

    /// Flush immediately, ignoring the coalescing window.
    pub fn flush_now(&mut self) -> bool {
        self.timer.cancel();
        if self.pending.is_empty() {
            return false;
        }
        self.flush();
        true
    }

    #[instrument(skip(self), fields(pending = self.pending.len()))]
    fn flush(&mut self) {
        // Start from the live address bar so unmanaged parameters survive.
        let mut pairs = parse_query(&self.navigator.query_string());
        for (key, value) in self.pending.drain() {
            if value.is_empty() || value == self.config.default_for(&key) {
                query::remove_pair(&mut pairs, &key);
            } else {
                query::set_pair(&mut pairs, &key, &value);
            }
        }

        let query = serialize_query(&pairs);
        debug!(%query, "replacing query string");
        self.navigator
            .replace_query_string(&query, NavigateOptions { scroll: false });
        self.current = pairs;
    }

    /// Re-read the address bar after an external navigation. Pending writes
    /// are kept and still flush on schedule.
    pub fn sync_from_location(&mut self) {
        self.current = parse_query(&self.navigator.query_string());
    }

    /// Drop staged writes for `keys`. The flush is cancelled once nothing is
    /// left to write. Returns the number of writes dropped.
    pub fn discard_pending<S: AsRef<str>>(&mut self, keys: &[S]) -> usize {
        let dropped = keys
            .iter()
            .filter(|key| self.pending.remove(key.as_ref()))
            .count();
        if self.pending.is_empty() && self.timer.cancel() {
            debug!("no writes left, flush cancelled");
        }
        dropped
    }

    /// Cancel the pending flush and drop staged writes.
    pub fn teardown(&mut self) {
        if self.timer.cancel() {
            debug!(dropped = self.pending.len(), "url state torn down with pending writes");
        }
        self.pending.clear();
    }
}

impl<N: Navigator> Drop for UrlState<N> {
    fn drop(&mut self) {
        self.teardown();
    }
}
