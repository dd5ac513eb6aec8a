//! Domain layer: records, query specifications, result pages and errors.
//!
//! These types carry no behaviour beyond field access and construction helpers;
//! evaluation lives in [`crate::engine`].
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: Schema-agnostic row model
//! - [`query`]: `QuerySpec`, filters, sort direction and `ResultPage`

pub mod error;
pub mod query;
pub mod record;

pub use error::{ListViewError, Result};
pub use query::{FilterValue, QuerySpec, ResultPage, SortDirection, DEFAULT_PAGE_SIZE, FILTER_ALL};
pub use record::Record;
