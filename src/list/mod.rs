//! List page state: search, sort and pagination wired to the URL.
//!
//! [`ListController`] composes the four toolkit units the way a list page
//! does. The address bar seeds the initial search text, sort and page;
//! later changes are written back through the coalescing synchronizer.
//! A settled search or a sort change sends the view back to page 1.


use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::field::FieldAccess;
use crate::pagination::{PageInfo, Pagination};
use crate::search::{Search, filter_items};
use crate::sort::{ColumnSort, SortDirection, SortState, format_sort_value, parse_sort_value};
use crate::url_state::{Navigator, UrlParamConfig, UrlState};

/// Sort token recorded when the user clears a sort that has a non-empty default.
const UNSORTED_TOKEN: &str = "none";

/// URL parameter names used by a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListKeys {
    pub search: String,
    pub sort: String,
    pub page: String,
}

impl Default for ListKeys {
    fn default() -> Self {
        Self {
            search: "q".to_string(),
            sort: "sort".to_string(),
            page: "page".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ListOptions {
    pub debounce: Duration,
    pub flush_delay: Duration,
    pub items_per_page: usize,
    pub default_sort: SortState,
    /// Fields the search query is matched against.
    pub search_fields: Vec<String>,
    pub keys: ListKeys,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            flush_delay: Duration::from_millis(100),
            items_per_page: 10,
            default_sort: SortState::unsorted(),
            search_fields: Vec::new(),
            keys: ListKeys::default(),
        }
    }
}

/// One rendered page of a list.
#[derive(Debug, Serialize)]
pub struct ListView<'a, T> {
    pub items: Vec<&'a T>,
    pub page: usize,
    pub total_pages: usize,
    pub page_info: PageInfo,
    /// Items left after the search filter, before pagination.
    pub matched: usize,
    #[serde(skip)]
    pub sort: SortState,
}

pub struct ListController<T, N: Navigator> {
    search: Search,
    sort: ColumnSort<T>,
    pagination: Pagination,
    url: UrlState<N>,
    keys: ListKeys,
    search_fields: Vec<String>,
}

impl<T: FieldAccess, N: Navigator> ListController<T, N> {
    pub fn new(navigator: N, mut params: UrlParamConfig, options: ListOptions) -> Self {
        let keys = options.keys;
        params.insert_if_absent(&keys.search, "");
        params.insert_if_absent(
            &keys.sort,
            format_sort_value(&options.default_sort).unwrap_or_default(),
        );
        params.insert_if_absent(&keys.page, "1");

        let url = UrlState::new(navigator, params, options.flush_delay);
        let query = url.get_param(&keys.search);
        let mut controller = Self {
            search: Search::new(&query, options.debounce, |_: &str| {}),
            sort: ColumnSort::new(options.default_sort),
            pagination: Pagination::new(0, options.items_per_page, None),
            url,
            keys,
            search_fields: options.search_fields,
        };
        controller.apply_url_sort_and_page();
        controller
    }

    /// Register a custom comparator for `column`.
    pub fn with_comparator<F>(mut self, column: impl Into<String>, compare: F) -> Self
    where
        F: Fn(&T, &T) -> std::cmp::Ordering + 'static,
    {
        self.sort = self.sort.with_comparator(column, compare);
        self
    }

    fn apply_url_sort_and_page(&mut self) {
        let token = self.url.get_param(&self.keys.sort);
        match parse_sort_value(&token) {
            Some(state) => self.sort.set_state(state),
            None if token.is_empty() || token == UNSORTED_TOKEN => self.sort.clear_sort(),
            None => {
                debug!(%token, "unrecognised sort token, using default sort");
                self.sort.reset();
            }
        }
        let page = self.url.get_param(&self.keys.page).parse().unwrap_or(1);
        // Total is unknown until the first `visible` call; allow any page for now.
        self.pagination.set_total_items(usize::MAX);
        self.pagination.set_current_page(page);
    }

    /// Re-read search, sort and page after an external navigation.
    ///
    /// Staged writes for the list keys are dropped so the next flush cannot
    /// overwrite the navigation with older local state.
    pub fn sync_from_url(&mut self) {
        let own_keys = [&self.keys.search, &self.keys.sort, &self.keys.page];
        let dropped = self.url.discard_pending(&own_keys);
        if dropped > 0 {
            debug!(dropped, "discarded staged list writes after navigation");
        }
        self.url.sync_from_location();
        let query = self.url.get_param(&self.keys.search);
        if query != self.search.debounced_query() {
            self.search = Search::new(&query, self.search.debounce(), |_: &str| {});
        }
        self.apply_url_sort_and_page();
    }

    pub fn search(&self) -> &Search {
        &self.search
    }

    pub fn sort_state(&self) -> &SortState {
        self.sort.state()
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn url(&self) -> &UrlState<N> {
        &self.url
    }

    pub fn url_mut(&mut self) -> &mut UrlState<N> {
        &mut self.url
    }

    pub fn set_query(&mut self, value: &str, now: Instant) {
        self.search.set_query(value, now);
    }

    pub fn clear_search(&mut self, now: Instant) {
        self.search.clear_search();
        self.pagination.set_current_page(1);
        self.url.set_params(
            [
                (self.keys.search.clone(), String::new()),
                (self.keys.page.clone(), "1".to_string()),
            ],
            now,
        );
    }

    pub fn toggle_sort(&mut self, column: &str, now: Instant) {
        self.sort.toggle_sort(column);
        self.sort_changed(now);
    }

    pub fn set_sort(&mut self, column: &str, direction: SortDirection, now: Instant) {
        self.sort.set_sort(column, direction);
        self.sort_changed(now);
    }

    pub fn clear_sort(&mut self, now: Instant) {
        self.sort.clear_sort();
        self.sort_changed(now);
    }

    fn sort_changed(&mut self, now: Instant) {
        let token = format_sort_value(self.sort.state()).unwrap_or_else(|| {
            if self.sort.default_sort().is_sorted() {
                UNSORTED_TOKEN.to_string()
            } else {
                String::new()
            }
        });
        self.pagination.set_current_page(1);
        self.url.set_params(
            [
                (self.keys.sort.clone(), token),
                (self.keys.page.clone(), "1".to_string()),
            ],
            now,
        );
    }

    pub fn set_page(&mut self, page: usize, now: Instant) {
        self.pagination.set_current_page(page);
        self.write_page(now);
    }

    pub fn next_page(&mut self, now: Instant) {
        self.pagination.next_page();
        self.write_page(now);
    }

    pub fn previous_page(&mut self, now: Instant) {
        self.pagination.previous_page();
        self.write_page(now);
    }

    fn write_page(&mut self, now: Instant) {
        let page = self.pagination.current_page().to_string();
        self.url.set_param(&self.keys.page, &page, now);
    }

    /// Let due timers fire. Returns true if anything changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let settled = self.search.poll(now).map(str::to_string);
        if let Some(query) = &settled {
            debug!(%query, "search settled, back to page 1");
            self.pagination.set_current_page(1);
            self.url.set_params(
                [
                    (self.keys.search.clone(), query.clone()),
                    (self.keys.page.clone(), "1".to_string()),
                ],
                now,
            );
        }
        let flushed = self.url.poll(now);
        settled.is_some() || flushed
    }

    /// Earliest instant at which [`ListController::poll`] has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.search.next_deadline(), self.url.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Filter by the settled query, sort, then slice the current page.
    ///
    /// If the current page no longer exists the view resets to page 1 and
    /// the `page` parameter is staged back to its default.
    pub fn visible<'a>(&mut self, items: &'a [T], now: Instant) -> ListView<'a, T> {
        let mut matched = filter_items(
            items,
            self.search_fields.as_slice(),
            self.search.debounced_query(),
        );
        self.sort.sort_view(&mut matched);

        let page_before = self.pagination.current_page();
        self.pagination.set_total_items(matched.len());
        if self.pagination.current_page() != page_before {
            self.write_page(now);
        }
        let page_items = self.pagination.paginated_items(&matched).to_vec();

        ListView {
            items: page_items,
            page: self.pagination.current_page(),
            total_pages: self.pagination.total_pages(),
            page_info: self.pagination.page_info(),
            matched: matched.len(),
            sort: self.sort.state().clone(),
        }
    }

    /// Cancel every pending timer.
    pub fn teardown(&mut self) {
        self.search.teardown();
        self.url.teardown();
    }
}
