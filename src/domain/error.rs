//! Error types for the list view engine.
//!
//! This module defines the centralized error type [`ListViewError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented with the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for list view operations.
///
/// The engine itself only ever produces [`ListViewError::InvalidArgument`]; the
/// remaining variants come from the ambient layers (collection loading and
/// configuration parsing).
///
/// # Examples
///
/// ```
/// use listview::ListViewError;
///
/// fn check_page_size(page_size: usize) -> Result<(), ListViewError> {
///     if page_size == 0 {
///         return Err(ListViewError::InvalidArgument("page size must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum ListViewError {
    /// A caller supplied a query the engine cannot evaluate.
    ///
    /// Raised for a zero page size or a page index below 1. The string names
    /// the offending parameter and value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A collection source returned data that is not a list of records.
    #[error("Source error: {0}")]
    Source(String),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for list view operations.
pub type Result<T> = std::result::Result<T, ListViewError>;
