//! Query specification and result types.
//!
//! A [`QuerySpec`] bundles every parameter a list screen can vary: free-text
//! search, per-field equality filters, the sort column and direction, and the
//! current page. It is rebuilt on each interaction and evaluated from scratch by
//! [`crate::engine::paginate`], which returns a [`ResultPage`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::record::Record;

/// Page size used when a query does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Serialized form of the [`FilterValue::All`] wildcard.
pub const FILTER_ALL: &str = "all";

/// Sort direction for the sort column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Asc,
    #[serde(rename = "desc", alias = "descending")]
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Value selected in a filter dropdown.
///
/// `All` is the wildcard entry every dropdown starts with and disables the
/// filter. It is serialized as the string `"all"`, so a field can never be
/// filtered on the literal value `"all"`; `Equals("all")` built by hand is a
/// wildcard too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FilterValue {
    All,
    Equals(Value),
}

impl FilterValue {
    /// Builds an equality filter.
    pub fn equals(value: impl Into<Value>) -> Self {
        Self::from(value.into())
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        match self {
            Self::All => true,
            Self::Equals(Value::String(s)) => s == FILTER_ALL,
            Self::Equals(_) => false,
        }
    }
}

impl From<Value> for FilterValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) if s == FILTER_ALL => Self::All,
            other => Self::Equals(other),
        }
    }
}

impl From<FilterValue> for Value {
    fn from(filter: FilterValue) -> Self {
        match filter {
            FilterValue::All => Value::String(FILTER_ALL.to_string()),
            FilterValue::Equals(value) => value,
        }
    }
}

/// Combined search, filter, sort and page parameters for one list request.
///
/// Serialized with camelCase keys; every key is optional on input.
///
/// # Examples
///
/// ```
/// use listview::{FilterValue, QuerySpec, SortDirection};
///
/// let spec = QuerySpec::default()
///     .with_search("acme", ["name", "customer.name"])
///     .with_filter("status", FilterValue::equals("shipped"))
///     .sorted_by("created_at", SortDirection::Desc)
///     .with_page(2, 25);
///
/// assert_eq!(spec.page_index, 2);
/// assert_eq!(spec.search_fields, vec!["name", "customer.name"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuerySpec {
    /// Free text matched case-insensitively as one substring.
    pub search_text: String,

    /// Fields searched for `search_text`, in order.
    pub search_fields: Vec<String>,

    /// Field name to selected filter value.
    pub filters: BTreeMap<String, FilterValue>,

    /// Sort column; `None` keeps input order.
    pub sort_field: Option<String>,

    pub sort_direction: SortDirection,

    /// 1-based page number.
    pub page_index: usize,

    /// Rows per page, must be positive.
    pub page_size: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            search_fields: Vec::new(),
            filters: BTreeMap::new(),
            sort_field: None,
            sort_direction: SortDirection::Asc,
            page_index: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QuerySpec {
    /// Sets the search text and the fields it is matched against.
    #[must_use]
    pub fn with_search<I, S>(mut self, text: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_text = text.into();
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_filter(mut self, field: impl Into<String>, value: FilterValue) -> Self {
        self.filters.insert(field.into(), value);
        self
    }

    #[must_use]
    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = Some(field.into());
        self.sort_direction = direction;
        self
    }

    #[must_use]
    pub const fn with_page(mut self, page_index: usize, page_size: usize) -> Self {
        self.page_index = page_index;
        self.page_size = page_size;
        self
    }

    /// Filters that actually constrain the result (wildcards skipped).
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.filters.iter().filter_map(|(field, filter)| match filter {
            FilterValue::Equals(value) if !filter.is_all() => Some((field.as_str(), value)),
            _ => None,
        })
    }
}

/// One page of filtered, sorted rows plus the match count before paging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub rows: Vec<Record>,

    /// Records left after search and filters; never affected by paging.
    pub total_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_with_defaults() {
        let spec: QuerySpec = serde_json::from_value(json!({
            "searchText": "oil",
            "sortField": "price",
            "sortDirection": "descending"
        }))
        .unwrap();

        assert_eq!(spec.search_text, "oil");
        assert_eq!(spec.sort_field.as_deref(), Some("price"));
        assert_eq!(spec.sort_direction, SortDirection::Desc);
        assert_eq!(spec.page_index, 1);
        assert_eq!(spec.page_size, DEFAULT_PAGE_SIZE);
        assert!(spec.filters.is_empty());
    }

    #[test]
    fn all_sentinel_round_trips_through_json() {
        let spec: QuerySpec = serde_json::from_value(json!({
            "filters": { "status": "all", "region": "north", "tier": 2 }
        }))
        .unwrap();

        assert_eq!(spec.filters["status"], FilterValue::All);
        assert_eq!(spec.filters["region"], FilterValue::equals("north"));
        assert_eq!(spec.filters["tier"], FilterValue::equals(2));

        let active: Vec<&str> = spec.active_filters().map(|(field, _)| field).collect();
        assert_eq!(active, vec!["region", "tier"]);

        let back = serde_json::to_value(&spec).unwrap();
        assert_eq!(back["filters"]["status"], json!("all"));
    }

    #[test]
    fn hand_built_all_is_a_wildcard() {
        let direct = QuerySpec::default()
            .with_filter("status", FilterValue::Equals(json!("all")))
            .with_filter("region", FilterValue::Equals(json!("north")));
        assert!(direct.filters["status"].is_all());

        let active: Vec<&str> = direct.active_filters().map(|(field, _)| field).collect();
        assert_eq!(active, vec!["region"]);

        let round_tripped: QuerySpec =
            serde_json::from_value(serde_json::to_value(&direct).unwrap()).unwrap();
        assert!(round_tripped.active_filters().eq(direct.active_filters()));
    }

    #[test]
    fn toggled_flips_direction() {
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.toggled(), SortDirection::Asc);
    }
}
