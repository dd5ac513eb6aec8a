//! List screen state and view model computation.
//!
//! [`ListViewState`] is the single source of truth for one list screen. It
//! holds the collection snapshot, the latest [`QuerySpec`] and the
//! [`ResultPage`] computed from them. The snapshot is replaced wholesale on
//! reload and never mutated by search, filter, sort or paging.
//!
//! # Example
//!
//! ```rust
//! use listview::{ListViewState, QuerySpec, Record};
//! use serde_json::json;
//!
//! let mut state = ListViewState::new(QuerySpec::default())?;
//! let records = vec![Record::from_value(json!({"name": "Acme"})).unwrap()];
//! state.replace_collection(records)?;
//!
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.pager.summary, "Showing 1-1 of 1");
//! # Ok::<(), listview::ListViewError>(())
//! ```

use super::modes::LoadState;
use crate::domain::{QuerySpec, Record, Result, ResultPage};
use crate::engine;
use crate::ui::viewmodel::{EmptyState, PagerInfo, SearchBarInfo, SortIndicator, TableViewModel};

/// Page-number buttons shown when no configuration says otherwise.
pub const DEFAULT_PAGER_WINDOW: usize = 5;

/// Choices offered by the rows-per-page selector by default.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Central state container for one list screen.
#[derive(Debug, Clone)]
pub struct ListViewState {
    /// Snapshot of the full collection as last loaded.
    pub collection: Vec<Record>,

    /// Query the current page was computed from.
    pub query: QuerySpec,

    /// Latest computed page. Always consistent with `collection` and `query`.
    pub page: ResultPage,

    pub load_state: LoadState,

    /// Maximum number of page-number buttons in the pager.
    pub pager_window: usize,

    /// Page sizes the user may pick. Empty accepts any positive size.
    pub page_size_options: Vec<usize>,
}

impl ListViewState {
    /// Creates an empty screen with the given starting query.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the query has a zero page size or page index.
    pub fn new(query: QuerySpec) -> Result<Self> {
        let page = engine::paginate(&[], &query)?;
        Ok(Self {
            collection: Vec::new(),
            query,
            page,
            load_state: LoadState::Idle,
            pager_window: DEFAULT_PAGER_WINDOW,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
        })
    }

    /// Evaluates `candidate` and commits it together with its page.
    ///
    /// On error nothing is committed, so the screen keeps showing the last
    /// valid page.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidArgument` from [`engine::paginate`].
    pub fn apply_query(&mut self, candidate: QuerySpec) -> Result<()> {
        let page = engine::paginate(&self.collection, &candidate)?;
        self.query = candidate;
        self.page = page;
        Ok(())
    }

    /// Replaces the collection snapshot and recomputes the page.
    ///
    /// If the current page now lies past the last non-empty page (for example
    /// after rows were deleted upstream), moves to the last page.
    ///
    /// # Errors
    ///
    /// Propagates `InvalidArgument` from [`engine::paginate`].
    pub fn replace_collection(&mut self, records: Vec<Record>) -> Result<()> {
        let _span = tracing::debug_span!("replace_collection", records = records.len()).entered();

        let page = engine::paginate(&records, &self.query)?;
        self.collection = records;
        self.page = page;
        self.load_state = LoadState::Ready;

        let last_page = self.total_pages();
        if last_page > 0 && self.query.page_index > last_page {
            tracing::debug!(
                from = self.query.page_index,
                to = last_page,
                "current page past the end, moving to last page"
            );
            let mut candidate = self.query.clone();
            candidate.page_index = last_page;
            self.apply_query(candidate)?;
        }

        Ok(())
    }

    /// Whether the rows-per-page selector offers `page_size`.
    #[must_use]
    pub fn accepts_page_size(&self, page_size: usize) -> bool {
        page_size > 0
            && (self.page_size_options.is_empty() || self.page_size_options.contains(&page_size))
    }

    /// Number of pages for the current filtered total.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        engine::total_pages(self.page.total_count, self.query.page_size)
    }

    /// Builds the renderable table view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> TableViewModel {
        let pager = PagerInfo::new(
            self.query.page_index,
            self.query.page_size,
            self.page.total_count,
            self.page.rows.len(),
            self.pager_window,
        );

        let sort = self.query.sort_field.as_ref().map(|field| SortIndicator {
            field: field.clone(),
            direction: self.query.sort_direction,
        });

        let search_bar = if self.query.search_text.is_empty() {
            None
        } else {
            Some(SearchBarInfo {
                query: self.query.search_text.clone(),
            })
        };

        TableViewModel {
            rows: self.page.rows.clone(),
            empty_state: self.compute_empty_state(&pager),
            pager,
            sort,
            search_bar,
            page_size_options: self.page_size_options.clone(),
            active_filter_count: self.query.active_filters().count(),
        }
    }

    fn compute_empty_state(&self, pager: &PagerInfo) -> Option<EmptyState> {
        if !self.page.rows.is_empty() {
            return None;
        }

        let (message, subtitle) = match (&self.load_state, self.collection.is_empty()) {
            (LoadState::Idle, true) => ("No data loaded".to_string(), "Refresh to load records".to_string()),
            (LoadState::Loading, true) => ("Loading records".to_string(), "Fetching the latest data".to_string()),
            (LoadState::Failed(error), true) => ("Could not load records".to_string(), error.clone()),
            (_, true) => ("No records yet".to_string(), String::new()),
            (_, false) if self.page.total_count == 0 => (
                "No matching records".to_string(),
                "Try a different search or clear the filters".to_string(),
            ),
            (_, false) => (
                "This page is empty".to_string(),
                format!("Go back to page {}", pager.total_pages),
            ),
        };

        Some(EmptyState { message, subtitle })
    }
}
