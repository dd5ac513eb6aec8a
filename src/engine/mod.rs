//! The list view engine: search, filter, sort and paginate as one pure pipeline.
//!
//! ```text
//! collection ─► search ─► field filters ─► stable sort ─► offset/limit ─► ResultPage
//! ```
//!
//! [`paginate`] borrows the collection and never mutates it; only the rows of
//! the returned page are cloned. Every call recomputes from scratch, so equal
//! inputs always produce equal pages.
//!
//! # Modules
//!
//! - `search`: case-insensitive substring matching over chosen fields
//! - `filter`: strict per-field equality
//! - `sort`: stable single-column sort with missing values last
//! - `pagination`: argument validation and slice arithmetic
//! - `compare`: value classification and ordering rules

mod compare;
mod filter;
mod pagination;
mod search;
mod sort;

pub use compare::{locale_compare, parse_instant, values_equal, SortKey};
pub use pagination::{page_range, total_pages};

use serde_json::Value;

use crate::domain::{QuerySpec, Record, Result, ResultPage};

/// Evaluates `spec` against `collection` and returns the requested page.
///
/// # Errors
///
/// Returns [`crate::ListViewError::InvalidArgument`] if `spec.page_size` is 0
/// or `spec.page_index` is below 1. No other input can fail: missing or
/// malformed fields are excluded from search, fail filters, and sort last.
///
/// # Examples
///
/// ```
/// use listview::{engine::paginate, QuerySpec, Record, SortDirection};
/// use serde_json::json;
///
/// let people: Vec<Record> = [
///     json!({"name": "Bob", "age": 40}),
///     json!({"name": "Al", "age": 30}),
///     json!({"name": "Cy", "age": 30}),
/// ]
/// .into_iter()
/// .filter_map(Record::from_value)
/// .collect();
///
/// let spec = QuerySpec::default()
///     .sorted_by("age", SortDirection::Asc)
///     .with_page(1, 2);
/// let page = paginate(&people, &spec)?;
///
/// assert_eq!(page.total_count, 3);
/// assert_eq!(page.rows[0].field("name"), Some(&json!("Al")));
/// assert_eq!(page.rows[1].field("name"), Some(&json!("Cy")));
/// # Ok::<(), listview::ListViewError>(())
/// ```
pub fn paginate(collection: &[Record], spec: &QuerySpec) -> Result<ResultPage> {
    let _span = tracing::debug_span!(
        "paginate",
        collection_len = collection.len(),
        search_len = spec.search_text.len(),
        sort_field = ?spec.sort_field,
        page_index = spec.page_index,
        page_size = spec.page_size
    )
    .entered();

    pagination::validate(spec.page_index, spec.page_size)?;

    let matched = select(collection, spec);
    let total_count = matched.len();

    let ordered = match spec.sort_field.as_deref() {
        Some(field) => sort::sort_rows(matched, field, spec.sort_direction),
        None => matched,
    };

    let range = pagination::page_range(total_count, spec.page_index, spec.page_size);
    let rows: Vec<Record> = ordered[range].iter().map(|&row| row.clone()).collect();

    tracing::debug!(total_count, page_rows = rows.len(), "page computed");

    Ok(ResultPage { rows, total_count })
}

/// Counts records passing search and filters, skipping sort and paging.
///
/// Page parameters are ignored, so this never fails.
#[must_use]
pub fn count_matching(collection: &[Record], spec: &QuerySpec) -> usize {
    select(collection, spec).len()
}

fn select<'a>(collection: &'a [Record], spec: &QuerySpec) -> Vec<&'a Record> {
    let needle = if spec.search_text.is_empty() {
        None
    } else {
        Some(spec.search_text.to_lowercase())
    };
    let filters: Vec<(&str, &Value)> = spec.active_filters().collect();

    collection
        .iter()
        .filter(|record| {
            needle
                .as_deref()
                .map_or(true, |n| search::matches_search(record, n, &spec.search_fields))
        })
        .filter(|record| filter::matches_filters(record, &filters))
        .collect()
}
