//! Display-side types for list screens.
//!
//! Rendering itself belongs to the host; this module only shapes state into
//! [`TableViewModel`] values it can draw.

pub mod viewmodel;

pub use viewmodel::{
    page_window, EmptyState, PagerInfo, SearchBarInfo, SortIndicator, TableViewModel,
};
