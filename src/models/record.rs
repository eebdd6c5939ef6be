//! Opaque records returned by the remote service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A flat mapping of named fields, kept exactly as the API returned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.0.get(field).and_then(Value::as_f64)
    }

    /// Field rendered for display. Missing and null fields render empty.
    pub fn display(&self, field: &str) -> String {
        match self.0.get(field) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => other.to_string(),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Value> for Record {
    /// Non-object values become an empty record.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_formats_values() {
        let record = Record::from(json!({
            "id": 3,
            "firstName": "Emily",
            "age": 28,
            "rating": 4.5,
            "maidenName": null,
            "active": true
        }));

        assert_eq!(record.id(), Some(3));
        assert_eq!(record.display("firstName"), "Emily");
        assert_eq!(record.display("age"), "28");
        assert_eq!(record.display("rating"), "4.5");
        assert_eq!(record.display("maidenName"), "");
        assert_eq!(record.display("missing"), "");
        assert_eq!(record.display("active"), "true");
        assert_eq!(record.number("rating"), Some(4.5));
    }

    #[test]
    fn test_deserialize_transparent() {
        let record: Record = serde_json::from_str(r#"{"title":"Mascara"}"#).unwrap();
        assert_eq!(record.display("title"), "Mascara");
        assert_eq!(record.fields().len(), 1);
    }

    #[test]
    fn test_non_object_becomes_empty() {
        assert!(Record::from(json!([1, 2])).fields().is_empty());
    }
}
