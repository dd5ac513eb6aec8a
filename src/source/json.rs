//! JSON file collection source.
//!
//! Reads a whole collection from one file. Two layouts are accepted:
//!
//! ```json
//! [ { "id": 1, "name": "Hydraulic Oil 46" }, ... ]
//! ```
//!
//! or, as produced by list-query exports,
//!
//! ```json
//! { "records": [ { "id": 1, "name": "Hydraulic Oil 46" }, ... ] }
//! ```
//!
//! The file is read on every [`CollectionSource::load`] call and never written.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{ListViewError, Record, Result};
use crate::source::backend::CollectionSource;

/// Top-level shapes a collection file may take.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CollectionFile {
    Bare(Vec<Value>),
    Wrapped { records: Vec<Value> },
}

/// Collection source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    file_path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source for `file_path`. The file is not opened until `load`.
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Parses collection JSON already in memory.
    ///
    /// # Errors
    ///
    /// Returns [`ListViewError::Source`] if the text is not valid JSON, has
    /// neither accepted layout, or contains a non-object element.
    pub fn parse(contents: &str) -> Result<Vec<Record>> {
        let file: CollectionFile = serde_json::from_str(contents)
            .map_err(|e| ListViewError::Source(format!("failed to parse JSON: {e}")))?;

        let values = match file {
            CollectionFile::Bare(values) | CollectionFile::Wrapped { records: values } => values,
        };

        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                Record::from_value(value).ok_or_else(|| {
                    ListViewError::Source(format!("record {index} is not a JSON object"))
                })
            })
            .collect()
    }
}

impl CollectionSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Record>> {
        tracing::debug!(path = ?self.file_path, "loading collection");

        let contents = std::fs::read_to_string(&self.file_path)?;
        let records = Self::parse(&contents)?;

        tracing::debug!(records = records.len(), "collection loaded from file");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_layouts() {
        let bare = JsonFileSource::parse(r#"[{"id": 1}, {"id": 2}]"#).unwrap();
        assert_eq!(bare.len(), 2);

        let wrapped = JsonFileSource::parse(r#"{"records": [{"id": 1}], "count": 1}"#).unwrap();
        assert_eq!(wrapped.len(), 1);
    }

    #[test]
    fn rejects_non_object_rows() {
        let err = JsonFileSource::parse(r#"[{"id": 1}, 7]"#).unwrap_err();
        assert!(matches!(err, ListViewError::Source(ref msg) if msg.contains("record 1")));
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(matches!(
            JsonFileSource::parse(r#"{"items": []}"#),
            Err(ListViewError::Source(_))
        ));
        assert!(matches!(JsonFileSource::parse("not json"), Err(ListViewError::Source(_))));
    }
}
