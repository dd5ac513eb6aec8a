//! View model types representing a renderable list screen.
//!
//! View models are computed by [`crate::ListViewState::compute_viewmodel`] and
//! handed to whatever draws the table. They contain no business logic, only
//! display-ready data: the page rows, the pager, the sort indicator and an
//! optional empty-state message.

use crate::domain::{Record, SortDirection};
use crate::engine::total_pages;

/// Complete view model for one list screen.
#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel {
    /// Rows of the current page, in display order.
    pub rows: Vec<Record>,

    pub pager: PagerInfo,

    /// Column header to decorate with a sort arrow.
    pub sort: Option<SortIndicator>,

    /// Present when a search is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Choices for the rows-per-page selector.
    pub page_size_options: Vec<usize>,

    /// Number of filters not set to "all", for a badge on the filter button.
    pub active_filter_count: usize,

    /// Shown instead of the table when there are no rows to display.
    pub empty_state: Option<EmptyState>,
}

/// Pager footer information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    /// Current 1-based page.
    pub page_index: usize,

    pub total_pages: usize,

    /// Rows matching search and filters across all pages.
    pub total_count: usize,

    /// 1-based position of the first row on this page, 0 if the page is empty.
    pub first_row: usize,

    /// 1-based position of the last row on this page, 0 if the page is empty.
    pub last_row: usize,

    pub has_previous: bool,
    pub has_next: bool,

    /// Page numbers to render as buttons.
    pub visible_pages: Vec<usize>,

    /// Human-readable range, e.g. `Showing 11-20 of 42`.
    pub summary: String,
}

impl PagerInfo {
    /// Computes pager information for a page of `rows_on_page` rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use listview::ui::PagerInfo;
    ///
    /// let pager = PagerInfo::new(2, 10, 42, 10, 5);
    /// assert_eq!(pager.summary, "Showing 11-20 of 42");
    /// assert_eq!(pager.total_pages, 5);
    /// assert_eq!(pager.visible_pages, vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn new(
        page_index: usize,
        page_size: usize,
        total_count: usize,
        rows_on_page: usize,
        window: usize,
    ) -> Self {
        let total_pages = total_pages(total_count, page_size);

        let (first_row, last_row) = if rows_on_page == 0 {
            (0, 0)
        } else {
            let first = page_index
                .saturating_sub(1)
                .saturating_mul(page_size)
                .saturating_add(1);
            (first, first.saturating_add(rows_on_page - 1))
        };

        let summary = if total_count == 0 {
            "No records".to_string()
        } else if rows_on_page == 0 {
            format!("No rows on page {page_index} of {total_pages}")
        } else {
            format!("Showing {first_row}-{last_row} of {total_count}")
        };

        Self {
            page_index,
            total_pages,
            total_count,
            first_row,
            last_row,
            has_previous: page_index > 1,
            has_next: page_index < total_pages,
            visible_pages: page_window(page_index, total_pages, window),
            summary,
        }
    }
}

/// Page numbers centred on `current`, at most `window` of them.
///
/// The window is shifted to stay within `1..=total_pages` and keeps its full
/// width whenever there are enough pages. A `current` past the end is treated
/// as the last page.
#[must_use]
pub fn page_window(current: usize, total_pages: usize, window: usize) -> Vec<usize> {
    if total_pages == 0 || window == 0 {
        return vec![];
    }

    let current = current.clamp(1, total_pages);
    let mut start = current.saturating_sub(window / 2).max(1);
    let end = start.saturating_add(window - 1).min(total_pages);

    if end - start + 1 < window && total_pages >= window {
        start = end + 1 - window;
    }

    (start..=end).collect()
}

/// Active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortIndicator {
    pub field: String,
    pub direction: SortDirection,
}

/// Search box echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No matching records").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_shifts_at_edges() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(9, 10, 4), vec![7, 8, 9, 10]);
    }

    #[test]
    fn window_shorter_than_requested_when_few_pages() {
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 0, 5), Vec::<usize>::new());
        assert_eq!(page_window(40, 3, 5), vec![1, 2, 3]);
    }

    #[test]
    fn last_partial_page() {
        let pager = PagerInfo::new(5, 10, 42, 2, 5);
        assert_eq!((pager.first_row, pager.last_row), (41, 42));
        assert!(pager.has_previous);
        assert!(!pager.has_next);
    }

    #[test]
    fn empty_and_out_of_range_summaries() {
        assert_eq!(PagerInfo::new(1, 10, 0, 0, 5).summary, "No records");

        let past_end = PagerInfo::new(9, 10, 42, 0, 5);
        assert_eq!(past_end.summary, "No rows on page 9 of 5");
        assert_eq!((past_end.first_row, past_end.last_row), (0, 0));
        assert!(!past_end.has_next);
    }
}
