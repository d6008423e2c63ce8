//! Client-side pagination over an in-memory list.
//!
//! Pages are 1-based. [`Pagination`] tracks the list length it was last
//! given; whenever that length shrinks below the current page the view
//! resets to page 1.

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// 1-based position of the first visible item, 0 for an empty list.
    pub start_index: usize,
    /// 1-based position of the last visible item, never past `total_items`.
    pub end_index: usize,
    pub total_items: usize,
}

impl PageInfo {
    /// Human-readable range, e.g. "Showing 11 - 20 of 47 jobs".
    pub fn summary(&self, item_name: &str) -> String {
        if self.total_items == 0 {
            format!("Showing 0 of 0 {}", item_name)
        } else {
            format!(
                "Showing {} - {} of {} {}",
                self.start_index, self.end_index, self.total_items, item_name
            )
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    items_per_page: usize,
    total_items: usize,
}

impl Pagination {
    /// `items_per_page` below 1 is treated as 1. An `initial_page` outside
    /// the valid range starts at page 1.
    pub fn new(total_items: usize, items_per_page: usize, initial_page: Option<usize>) -> Self {
        let mut pagination = Self {
            current_page: initial_page.unwrap_or(1).max(1),
            items_per_page: items_per_page.max(1),
            total_items: 0,
        };
        pagination.set_total_items(total_items);
        pagination
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page).max(1)
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Go to `page`, clamped into `1..=total_pages`.
    pub fn set_current_page(&mut self, page: usize) {
        let clamped = page.clamp(1, self.total_pages());
        if clamped != page {
            debug!(requested = page, clamped, "page clamped");
        }
        self.current_page = clamped;
    }

    pub fn next_page(&mut self) {
        self.set_current_page(self.current_page + 1);
    }

    pub fn previous_page(&mut self) {
        self.set_current_page(self.current_page.saturating_sub(1));
    }

    /// Change the page size and go back to page 1.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    /// Record the current list length. Resets to page 1 if the current page
    /// no longer exists.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        let total_pages = self.total_pages();
        if self.current_page > total_pages {
            debug!(
                page = self.current_page,
                total_pages, "current page out of range, resetting to page 1"
            );
            self.current_page = 1;
        }
    }

    pub fn page_info(&self) -> PageInfo {
        if self.total_items == 0 {
            return PageInfo {
                start_index: 0,
                end_index: 0,
                total_items: 0,
            };
        }
        let offset = (self.current_page - 1).saturating_mul(self.items_per_page);
        PageInfo {
            start_index: offset.saturating_add(1),
            end_index: offset
                .saturating_add(self.items_per_page)
                .min(self.total_items),
            total_items: self.total_items,
        }
    }

    /// Slice the visible page out of `items` without touching any state.
    pub fn paginated_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.current_page - 1)
            .saturating_mul(self.items_per_page)
            .min(items.len());
        let end = self
            .current_page
            .saturating_mul(self.items_per_page)
            .min(items.len());
        &items[start..end]
    }

    /// Sync with the length of `items`, then slice the visible page.
    pub fn paginate<'a, T>(&mut self, items: &'a [T]) -> &'a [T] {
        self.set_total_items(items.len());
        self.paginated_items(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_total_pages_is_at_least_one() {
        assert_eq!(Pagination::new(0, 10, None).total_pages(), 1);
        assert_eq!(Pagination::new(10, 10, None).total_pages(), 1);
        assert_eq!(Pagination::new(11, 10, None).total_pages(), 2);
        assert_eq!(Pagination::new(47, 10, None).total_pages(), 5);
    }

    #[test]
    fn test_every_page_fits_and_last_page_holds_remainder() {
        for per_page in 1..=7 {
            for n in 0..=30 {
                let items = numbers(n);
                let mut pagination = Pagination::new(n, per_page, None);
                let total_pages = pagination.total_pages();
                assert_eq!(total_pages, n.div_ceil(per_page).max(1));

                for page in 1..=total_pages {
                    pagination.set_current_page(page);
                    let visible = pagination.paginated_items(&items);
                    assert!(visible.len() <= per_page);
                    if page == total_pages {
                        assert_eq!(visible.len(), n - (total_pages - 1) * per_page);
                    }
                }
            }
        }
    }

    #[test]
    fn test_set_current_page_clamps() {
        let mut pagination = Pagination::new(47, 10, None);

        pagination.set_current_page(0);
        assert_eq!(pagination.current_page(), 1);

        pagination.set_current_page(99);
        assert_eq!(pagination.current_page(), 5);

        pagination.set_current_page(3);
        assert_eq!(pagination.current_page(), 3);
    }

    #[test]
    fn test_shrinking_list_resets_to_first_page() {
        let mut pagination = Pagination::new(25, 10, None);
        pagination.set_current_page(3);
        assert_eq!(pagination.current_page(), 3);

        let shrunk = numbers(5);
        let visible = pagination.paginate(&shrunk);

        assert_eq!(pagination.current_page(), 1);
        assert_eq!(visible, &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shrinking_within_range_keeps_page() {
        let mut pagination = Pagination::new(25, 10, Some(2));
        pagination.set_total_items(15);
        assert_eq!(pagination.current_page(), 2);
    }

    #[test]
    fn test_initial_page_out_of_range_starts_at_one() {
        assert_eq!(Pagination::new(5, 10, Some(4)).current_page(), 1);
        assert_eq!(Pagination::new(50, 10, Some(0)).current_page(), 1);
        assert_eq!(Pagination::new(50, 10, Some(4)).current_page(), 4);
    }

    #[test]
    fn test_page_info_and_summary() {
        let mut pagination = Pagination::new(47, 10, None);
        pagination.set_current_page(2);
        let info = pagination.page_info();
        assert_eq!(
            info,
            PageInfo {
                start_index: 11,
                end_index: 20,
                total_items: 47
            }
        );
        assert_eq!(info.summary("jobs"), "Showing 11 - 20 of 47 jobs");

        pagination.set_current_page(5);
        assert_eq!(pagination.page_info().end_index, 47);

        let empty = Pagination::new(0, 10, None).page_info();
        assert_eq!(empty.start_index, 0);
        assert_eq!(empty.summary("jobs"), "Showing 0 of 0 jobs");
    }

    #[test]
    fn test_next_and_previous() {
        let mut pagination = Pagination::new(25, 10, None);
        assert!(!pagination.has_previous_page());
        assert!(pagination.has_next_page());

        pagination.next_page();
        pagination.next_page();
        pagination.next_page();
        assert_eq!(pagination.current_page(), 3);
        assert!(!pagination.has_next_page());

        pagination.previous_page();
        pagination.previous_page();
        pagination.previous_page();
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_zero_items_per_page_is_one() {
        let mut pagination = Pagination::new(3, 0, None);
        assert_eq!(pagination.items_per_page(), 1);
        assert_eq!(pagination.total_pages(), 3);

        pagination.set_current_page(3);
        pagination.set_items_per_page(2);
        assert_eq!(pagination.current_page(), 1);
        assert_eq!(pagination.total_pages(), 2);
    }
}
