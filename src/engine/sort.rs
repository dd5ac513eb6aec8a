//! Stable single-column sort step.

use std::cmp::Ordering;

use super::compare::SortKey;
use crate::domain::{Record, SortDirection};

/// Sorts borrowed rows by `field`.
///
/// Keys are extracted once per row before sorting. The sort is stable in both
/// directions, and rows whose field is missing or null always come last.
#[must_use]
pub fn sort_rows<'a>(rows: Vec<&'a Record>, field: &str, direction: SortDirection) -> Vec<&'a Record> {
    let mut keyed: Vec<(Option<SortKey>, &Record)> = rows
        .into_iter()
        .map(|row| (row.field(field).and_then(SortKey::from_value), row))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare_keys(a.as_ref(), b.as_ref(), direction));

    keyed.into_iter().map(|(_, row)| row).collect()
}

/// Directional comparison with missing keys pinned to the end.
#[must_use]
pub fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = a.compare(b);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
    }
}
