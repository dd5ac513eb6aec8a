//! Collection sources feeding list screens.
//!
//! # Modules
//!
//! - `backend`: the [`CollectionSource`] trait
//! - `json`: read-only JSON file implementation

pub mod backend;
pub mod json;

pub use backend::CollectionSource;
pub use json::JsonFileSource;
