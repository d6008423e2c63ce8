//! Address bar access, abstracted so the synchronizer can run without a
//! browser router.

#[cfg(test)]
use mockall::automock;

/// Options for a history replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigateOptions {
    /// Scroll to the top after navigating. The synchronizer always keeps the
    /// scroll position.
    pub scroll: bool,
}

/// Read and replace the current query string. Can be mocked in tests.
#[cfg_attr(test, automock)]
pub trait Navigator {
    /// Current query string without the leading `?`.
    fn query_string(&self) -> String;

    /// Replace the query string in place (history replace, not push).
    fn replace_query_string(&mut self, query: &str, options: NavigateOptions);
}

/// In-memory address bar that records every replacement.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    query: String,
    history: Vec<String>,
    scroll_resets: usize,
}

impl MemoryNavigator {
    pub fn new(initial_query: &str) -> Self {
        Self {
            query: initial_query
                .strip_prefix('?')
                .unwrap_or(initial_query)
                .to_string(),
            history: Vec::new(),
            scroll_resets: 0,
        }
    }

    /// Every query string written by `replace_query_string`, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn replace_count(&self) -> usize {
        self.history.len()
    }

    pub fn scroll_resets(&self) -> usize {
        self.scroll_resets
    }

    /// Simulate an external navigation such as the back button.
    pub fn navigate_externally(&mut self, query: &str) {
        self.query = query.strip_prefix('?').unwrap_or(query).to_string();
    }
}

impl Navigator for MemoryNavigator {
    fn query_string(&self) -> String {
        self.query.clone()
    }

    fn replace_query_string(&mut self, query: &str, options: NavigateOptions) {
        if options.scroll {
            self.scroll_resets += 1;
        }
        self.query = query.to_string();
        self.history.push(self.query.clone());
    }
}
