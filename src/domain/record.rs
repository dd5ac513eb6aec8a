//! Schema-agnostic record model.
//!
//! A [`Record`] is one row of application data (a user, an order, an inventory
//! item). The engine never knows the schema; it only needs named-field access,
//! which is provided through dotted paths such as `customer.name`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of a list screen: an ordered map from field name to JSON value.
///
/// Serialized transparently as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Converts a JSON value into a record.
    ///
    /// Returns `None` if the value is not a JSON object.
    ///
    /// # Examples
    ///
    /// ```
    /// use listview::Record;
    /// use serde_json::json;
    ///
    /// assert!(Record::from_value(json!({"name": "Al"})).is_some());
    /// assert!(Record::from_value(json!([1, 2])).is_none());
    /// ```
    #[must_use]
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Looks up a field by name or dotted path.
    ///
    /// Each path segment descends into a nested object. A missing key, a
    /// segment that lands on a non-object, or an explicit `null` all yield
    /// `None`: the engine treats these identically as "missing".
    ///
    /// # Examples
    ///
    /// ```
    /// use listview::Record;
    /// use serde_json::json;
    ///
    /// let record = Record::from_value(json!({
    ///     "customer": { "name": "Acme Lubricants" },
    ///     "notes": null
    /// })).unwrap();
    ///
    /// assert_eq!(record.field("customer.name"), Some(&json!("Acme Lubricants")));
    /// assert_eq!(record.field("notes"), None);
    /// assert_eq!(record.field("customer.name.first"), None);
    /// ```
    #[must_use]
    pub fn field(&self, path: &str) -> Option<&Value> {
        self.raw_field(path).filter(|value| !value.is_null())
    }

    /// Like [`Record::field`], but keeps an explicit `null` distinct from an
    /// absent key. Used by strict-equality filtering.
    #[must_use]
    pub fn raw_field(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Sets a top-level field, returning the previous value if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    /// Number of top-level fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrows the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_walks_nested_objects() {
        let record = Record::from_value(json!({
            "id": 7,
            "shipping": { "address": { "city": "Rotterdam" } }
        }))
        .unwrap();

        assert_eq!(record.field("id"), Some(&json!(7)));
        assert_eq!(record.field("shipping.address.city"), Some(&json!("Rotterdam")));
        assert_eq!(record.field("shipping.phone"), None);
        assert_eq!(record.field("id.value"), None);
    }

    #[test]
    fn null_is_missing_but_raw_field_keeps_it() {
        let record = Record::from_value(json!({
            "deleted_at": null,
            "customer": { "email": null, "name": "Harbor Marine" }
        }))
        .unwrap();

        assert_eq!(record.field("deleted_at"), None);
        assert_eq!(record.raw_field("deleted_at"), Some(&Value::Null));
        assert_eq!(record.raw_field("absent"), None);

        assert_eq!(record.field("customer.email"), None);
        assert_eq!(record.raw_field("customer.email"), Some(&Value::Null));
        assert_eq!(record.field("customer.name"), record.raw_field("customer.name"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let record: Record = [("name", json!("Al")), ("age", json!(30))].into_iter().collect();
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value, json!({"name": "Al", "age": 30}));
    }
}
