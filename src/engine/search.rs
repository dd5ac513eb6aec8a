//! Free-text search step.

use std::borrow::Cow;

use serde_json::Value;

use crate::domain::Record;

/// Returns true if `needle` occurs in at least one of `fields`.
///
/// `needle` must already be lowercased; field text is lowercased here. The
/// needle is matched as one substring, never split into words. An empty field
/// list matches nothing.
#[must_use]
pub fn matches_search(record: &Record, needle: &str, fields: &[String]) -> bool {
    fields.iter().any(|field| {
        record
            .field(field)
            .and_then(searchable_text)
            .is_some_and(|text| text.to_lowercase().contains(needle))
    })
}

/// Text a value contributes to search, if any.
///
/// Strings are searched verbatim and numbers by their decimal form (so an
/// order number typed into the box still matches). Booleans, objects and
/// arrays are never searchable.
fn searchable_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        _ => None,
    }
}
