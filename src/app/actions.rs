//! Actions representing side effects for the host application to execute.
//!
//! The event handler stays free of I/O: when a transition needs the outside
//! world (fetching the collection, showing a toast, resetting scroll) it returns
//! an [`Action`] and the host performs it.
//!
//! # Example
//!
//! ```rust
//! use listview::Action;
//!
//! let actions = vec![Action::FetchCollection, Action::ScrollToTop];
//! assert_eq!(actions.len(), 2);
//! ```

/// Commands produced by [`crate::app::handle_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch the collection and answer with `CollectionLoaded` or
    /// `CollectionFailed`.
    FetchCollection,

    /// Surface a failure to the user.
    ShowError {
        /// Message suitable for display.
        message: String,
    },

    /// The visible page changed; reset the table scroll position.
    ScrollToTop,
}
