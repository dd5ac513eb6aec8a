//! Event handling and query transition logic.
//!
//! Every user interaction on a list screen (a search keystroke, a filter
//! selection, a column-header click, a pager click) arrives as an [`Event`].
//! [`handle_event`] derives the next [`crate::QuerySpec`] from the current
//! one, re-evaluates it through the engine, and returns the actions the host
//! must perform.
//!
//! # Transition Rules
//!
//! - Changing the search text, a filter or the page size returns to page 1.
//! - Clicking the active sort column flips its direction; clicking another
//!   column sorts it ascending. The page is kept.
//! - `NextPage` and `PreviousPage` stay within `1..=total_pages`.
//! - A rejected event (zero page index or page size) leaves the state as it was.
//!
//! # Example
//!
//! ```rust
//! use listview::{handle_event, Event, ListViewState, QuerySpec};
//!
//! let mut state = ListViewState::new(QuerySpec::default())?;
//! let (render, actions) = handle_event(&mut state, &Event::SearchChanged("acme".to_string()))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), listview::ListViewError>(())
//! ```

use super::modes::LoadState;
use crate::app::{Action, ListViewState};
use crate::domain::{FilterValue, ListViewError, QuerySpec, Record, Result, SortDirection};

/// Interactions and fetch outcomes a list screen reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The user asked for fresh data.
    Refresh,

    /// The host's fetch completed with a new snapshot.
    CollectionLoaded(Vec<Record>),

    /// The host's fetch failed.
    CollectionFailed {
        /// Message describing the failure.
        error: String,
    },

    /// The search box text changed.
    SearchChanged(String),

    SearchCleared,

    /// A filter dropdown changed; [`FilterValue::All`] disables the filter.
    FilterSelected {
        field: String,
        value: FilterValue,
    },

    FiltersCleared,

    /// A column header was clicked.
    SortClicked(String),

    /// A page-number button was clicked (1-based).
    PageSelected(usize),

    NextPage,
    PreviousPage,

    /// The rows-per-page selector changed.
    PageSizeChanged(usize),
}

impl Event {
    /// Short name used as a tracing field, without dumping payloads.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::CollectionLoaded(_) => "collection_loaded",
            Self::CollectionFailed { .. } => "collection_failed",
            Self::SearchChanged(_) => "search_changed",
            Self::SearchCleared => "search_cleared",
            Self::FilterSelected { .. } => "filter_selected",
            Self::FiltersCleared => "filters_cleared",
            Self::SortClicked(_) => "sort_clicked",
            Self::PageSelected(_) => "page_selected",
            Self::NextPage => "next_page",
            Self::PreviousPage => "previous_page",
            Self::PageSizeChanged(_) => "page_size_changed",
        }
    }
}

/// Processes an event, updates the state, and returns actions to execute.
///
/// # Returns
///
/// `(needs_render, actions)`: whether the visible screen changed, and the side
/// effects for the host to perform in order.
///
/// # Errors
///
/// Returns [`ListViewError::InvalidArgument`] for a zero page index, or a page
/// size that is zero or not among [`ListViewState::page_size_options`]. The
/// state is unchanged in that case.
///
/// # Tracing
///
/// Each call runs inside a debug-level span carrying the event kind.
pub fn handle_event(state: &mut ListViewState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.kind()).entered();

    match event {
        Event::Refresh => {
            state.load_state = LoadState::Loading;
            Ok((true, vec![Action::FetchCollection]))
        }
        Event::CollectionLoaded(records) => {
            tracing::debug!(records = records.len(), "collection loaded");
            state.replace_collection(records.clone())?;
            Ok((true, vec![]))
        }
        Event::CollectionFailed { error } => {
            tracing::warn!(error = %error, "collection fetch failed");
            state.load_state = LoadState::Failed(error.clone());
            Ok((
                true,
                vec![Action::ShowError {
                    message: format!("Could not load records: {error}"),
                }],
            ))
        }
        Event::SearchChanged(text) => {
            if *text == state.query.search_text {
                return Ok((false, vec![]));
            }
            let mut candidate = first_page(&state.query);
            candidate.search_text.clone_from(text);
            commit(state, candidate)
        }
        Event::SearchCleared => {
            if state.query.search_text.is_empty() {
                return Ok((false, vec![]));
            }
            let mut candidate = first_page(&state.query);
            candidate.search_text.clear();
            commit(state, candidate)
        }
        Event::FilterSelected { field, value } => {
            if state.query.filters.get(field) == Some(value) {
                return Ok((false, vec![]));
            }
            let mut candidate = first_page(&state.query);
            candidate.filters.insert(field.clone(), value.clone());
            commit(state, candidate)
        }
        Event::FiltersCleared => {
            if state.query.filters.is_empty() {
                return Ok((false, vec![]));
            }
            let mut candidate = first_page(&state.query);
            candidate.filters.clear();
            commit(state, candidate)
        }
        Event::SortClicked(field) => {
            let mut candidate = state.query.clone();
            if candidate.sort_field.as_ref() == Some(field) {
                candidate.sort_direction = candidate.sort_direction.toggled();
            } else {
                candidate.sort_field = Some(field.clone());
                candidate.sort_direction = SortDirection::Asc;
            }
            tracing::debug!(field = %field, direction = ?candidate.sort_direction, "sort changed");
            commit(state, candidate)
        }
        Event::PageSelected(page_index) => go_to_page(state, *page_index),
        Event::NextPage => {
            if state.query.page_index >= state.total_pages() {
                return Ok((false, vec![]));
            }
            let next = state.query.page_index + 1;
            go_to_page(state, next)
        }
        Event::PreviousPage => {
            if state.query.page_index <= 1 {
                return Ok((false, vec![]));
            }
            let previous = state.query.page_index - 1;
            go_to_page(state, previous)
        }
        Event::PageSizeChanged(page_size) => {
            if *page_size == 0 {
                return Err(ListViewError::InvalidArgument(
                    "page size must be positive".to_string(),
                ));
            }
            if !state.accepts_page_size(*page_size) {
                return Err(ListViewError::InvalidArgument(format!(
                    "page size {page_size} is not one of {:?}",
                    state.page_size_options
                )));
            }
            if *page_size == state.query.page_size {
                return Ok((false, vec![]));
            }
            let mut candidate = first_page(&state.query);
            candidate.page_size = *page_size;
            commit(state, candidate)
        }
    }
}

fn first_page(query: &QuerySpec) -> QuerySpec {
    let mut candidate = query.clone();
    candidate.page_index = 1;
    candidate
}

fn commit(state: &mut ListViewState, candidate: QuerySpec) -> Result<(bool, Vec<Action>)> {
    let page_changed = candidate.page_index != state.query.page_index;
    state.apply_query(candidate)?;
    let actions = if page_changed { vec![Action::ScrollToTop] } else { vec![] };
    Ok((true, actions))
}

fn go_to_page(state: &mut ListViewState, page_index: usize) -> Result<(bool, Vec<Action>)> {
    if page_index == 0 {
        return Err(ListViewError::InvalidArgument(
            "page numbers start at 1".to_string(),
        ));
    }
    if page_index == state.query.page_index {
        return Ok((false, vec![]));
    }
    let mut candidate = state.query.clone();
    candidate.page_index = page_index;
    commit(state, candidate)
}
