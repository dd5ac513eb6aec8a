//! Field equality filter step.

use serde_json::Value;

use super::compare::values_equal;
use crate::domain::Record;

/// Returns true if the record satisfies every active filter.
///
/// A field absent from the record never matches; a field explicitly set to
/// `null` matches a `null` filter value.
#[must_use]
pub fn matches_filters(record: &Record, filters: &[(&str, &Value)]) -> bool {
    filters.iter().all(|(field, expected)| {
        record
            .raw_field(field)
            .is_some_and(|actual| values_equal(actual, expected))
    })
}
