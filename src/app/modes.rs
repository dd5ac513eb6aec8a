//! Load lifecycle of the collection behind a list screen.
//!
//! The engine itself is synchronous; fetching the collection is an external
//! one-shot operation. [`LoadState`] records where that fetch stands so the
//! view model can pick an empty-state message.
//!
//! ```text
//! Idle ──Refresh──► Loading ──CollectionLoaded──► Ready
//!                      │
//!                      └──CollectionFailed──► Failed
//!
//! Ready | Failed ──Refresh──► Loading
//! ```

/// Where the collection fetch stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// A fetch was requested and has not completed.
    ///
    /// The previous snapshot, if any, stays visible.
    Loading,

    /// The collection snapshot is current.
    Ready,

    /// The last fetch failed; holds the host-supplied message.
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}
