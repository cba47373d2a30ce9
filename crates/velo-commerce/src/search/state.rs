//! Transient display state driving the pipeline.

use crate::search::SortKey;
use serde::{Deserialize, Serialize};

/// Number of items revealed per pagination step.
pub const PAGE_SIZE: usize = 10;

/// What the user currently sees: search term, sort key, and how many pages
/// of results have been revealed by scrolling.
///
/// Changing the search term or the sort key resets pagination to the first
/// page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayState {
    /// Case-insensitive substring matched against product titles.
    pub search_term: String,
    /// Active sort key.
    pub sort_key: SortKey,
    /// Number of pages revealed so far, starting at 1.
    pub page_count: usize,
}

impl DisplayState {
    /// Initial state: no search term, price sort, first page.
    pub fn new() -> Self {
        Self {
            search_term: String::new(),
            sort_key: SortKey::default(),
            page_count: 1,
        }
    }

    /// Change the search term and reset to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page_count = 1;
    }

    /// Change the sort key and reset to the first page.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        self.page_count = 1;
    }

    /// Reveal one more page of results.
    pub fn advance_page(&mut self) {
        self.page_count = self.page_count.saturating_add(1);
    }

    /// Upper bound on the number of items currently displayed.
    pub fn visible_limit(&self) -> usize {
        self.page_count.saturating_mul(PAGE_SIZE)
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}
