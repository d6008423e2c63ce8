//! Client-side list state for dashboard and ATS list pages.
//!
//! Four independent units, composed by [`list::ListController`]:
//!
//! - [`search`]: debounced search text
//! - [`sort`]: stable column sort with per-column comparators
//! - [`pagination`]: page slicing with clamping and auto-reset
//! - [`url_state`]: coalesced, default-eliding sync of parameters into the URL
//!
//! Nothing here sleeps or spawns. Timers are deadlines checked against an
//! `Instant` supplied by the host event loop.

pub mod config;
pub mod field;
pub mod list;
pub mod pagination;
pub mod search;
pub mod sort;
pub mod timer;
pub mod url_state;

#[cfg(feature = "cli")]
pub mod cli;
