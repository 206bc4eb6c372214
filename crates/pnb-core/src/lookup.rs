//! Lookup result model and the port the HTTP adapter implements.
//!
//! The remote API has an open schema: zero or more fields with names we do
//! not know ahead of time. The result keeps every field verbatim, in the
//! order the API sent them; deciding which fields are worth showing is the
//! formatter's job, not this module's.

use async_trait::async_trait;

use crate::{query::PhoneQuery, Error, Result};

/// A single field value from the lookup API.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    /// JSON null.
    Empty,
}

impl FieldValue {
    /// String rendering used for display and for the meaningful-value filter.
    pub fn render(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Empty,
            serde_json::Value::String(s) => Self::Text(s.clone()),
            serde_json::Value::Number(n) => Self::Number(n.clone()),
            // Booleans and nested structures are carried as their JSON text.
            other => Self::Text(other.to_string()),
        }
    }
}

/// The fields the lookup API returned for one query, order preserved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookupResult {
    fields: Vec<(String, FieldValue)>,
}

impl LookupResult {
    /// Interpret a parsed JSON body.
    ///
    /// A non-object body is a transport-level problem (the API broke its
    /// contract). An object with a truthy top-level `error` is a successful
    /// transport outcome carrying a semantic error and becomes
    /// [`Error::Remote`]. Anything else is kept verbatim.
    pub fn from_value(v: &serde_json::Value) -> Result<Self> {
        let Some(object) = v.as_object() else {
            return Err(Error::Transport(
                "lookup API response is not a JSON object".to_string(),
            ));
        };

        if let Some(message) = object.get("error").and_then(truthy_text) {
            return Err(Error::Remote(message));
        }

        let fields = object
            .iter()
            .map(|(k, v)| (k.clone(), FieldValue::from(v)))
            .collect();
        Ok(Self { fields })
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Truthiness of the `error` field, matching how the API is observed to use
/// it: present-but-null, empty-string, `0` and `false` all mean "no error".
fn truthy_text(v: &serde_json::Value) -> Option<String> {
    match v {
        serde_json::Value::Null => None,
        serde_json::Value::Bool(b) => b.then(|| "true".to_string()),
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Port for the remote number-lookup service.
///
/// One call per query, no retries; the pipeline decides how to present
/// failure. The HTTP implementation lives in `pnb-lookup`.
#[async_trait]
pub trait LookupPort: Send + Sync {
    async fn lookup(&self, query: &PhoneQuery) -> Result<LookupResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_fields_verbatim_and_in_order() {
        let v = json!({"name": "Jane", "city": "NA", "sim_count": 2, "note": null});
        let r = LookupResult::from_value(&v).unwrap();
        let keys: Vec<&str> = r.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "city", "sim_count", "note"]);
        let values: Vec<FieldValue> = r.fields().map(|(_, v)| v.clone()).collect();
        assert_eq!(values[0], FieldValue::Text("Jane".to_string()));
        assert_eq!(values[1], FieldValue::Text("NA".to_string()));
        assert_eq!(values[3], FieldValue::Empty);
    }

    #[test]
    fn truthy_error_field_becomes_remote_error() {
        let v = json!({"error": "blocked"});
        match LookupResult::from_value(&v) {
            Err(Error::Remote(m)) => assert_eq!(m, "blocked"),
            other => panic!("expected Remote, got {other:?}"),
        }
    }

    #[test]
    fn falsy_error_field_is_just_another_field() {
        for v in [json!({"error": ""}), json!({"error": null}), json!({"error": 0})] {
            let r = LookupResult::from_value(&v).unwrap();
            assert_eq!(r.fields().count(), 1, "{v}");
        }
    }

    #[test]
    fn non_object_body_is_a_transport_error() {
        for v in [json!([1, 2]), json!("nope"), json!(42)] {
            assert!(matches!(
                LookupResult::from_value(&v),
                Err(Error::Transport(_))
            ));
        }
    }

    #[test]
    fn empty_object_is_an_empty_result() {
        let r = LookupResult::from_value(&json!({})).unwrap();
        assert!(r.is_empty());
    }
}
