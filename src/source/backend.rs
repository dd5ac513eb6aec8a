//! Collection source abstraction.
//!
//! The host application fetches list data however it likes (a remote list
//! query, a fixture file). [`CollectionSource`] is the seam through which that
//! data reaches the engine, so tests and tools can swap implementations.

use crate::domain::{Record, Result};

/// Supplies the full collection for one list screen.
///
/// # Implementations
///
/// - [`crate::source::JsonFileSource`]: reads a JSON file
/// - `Vec<Record>`: an in-memory snapshot, mostly for tests
///
/// # Examples
///
/// ```
/// use listview::source::CollectionSource;
/// use listview::Record;
/// use serde_json::json;
///
/// let snapshot = vec![Record::from_value(json!({"sku": "EP-90"})).unwrap()];
/// assert_eq!(snapshot.load()?.len(), 1);
/// # Ok::<(), listview::ListViewError>(())
/// ```
pub trait CollectionSource {
    /// Loads every record. Called once per refresh.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying data cannot be read or is not a
    /// list of JSON objects.
    fn load(&self) -> Result<Vec<Record>>;
}

impl CollectionSource for Vec<Record> {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.clone())
    }
}
