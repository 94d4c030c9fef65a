use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Placeholder printed for a field the record does not carry.
pub const MISSING_PLACEHOLDER: &str = "None";

/// One element of the course list. Any fields besides `id` and `title` are kept but unused.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseRecord {
    pub data: Map<String, Value>,
}

impl CourseRecord {
    pub fn field(&self, name: &str) -> FieldValue<'_> {
        match self.data.get(name) {
            Some(value) => FieldValue::Present(value),
            None => FieldValue::Missing,
        }
    }

    pub fn id(&self) -> FieldValue<'_> {
        self.field("id")
    }

    pub fn title(&self) -> FieldValue<'_> {
        self.field("title")
    }

    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            id: self.data.get("id").cloned(),
            title: self.data.get("title").cloned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Present(&'a Value),
    Missing,
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Present(Value::String(s)) => f.write_str(s),
            FieldValue::Present(Value::Bool(true)) => f.write_str("True"),
            FieldValue::Present(Value::Bool(false)) => f.write_str("False"),
            // An explicit null reads the same as an absent field.
            FieldValue::Present(Value::Null) | FieldValue::Missing => {
                f.write_str(MISSING_PLACEHOLDER)
            }
            FieldValue::Present(other) => write!(f, "{}", other),
        }
    }
}

/// The `{ id, title }` projection written by the summary export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> CourseRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_string_fields_render_raw() {
        let course = record(json!({"id": "rust-101", "title": "Intro to Rust"}));
        assert_eq!(course.id().to_string(), "rust-101");
        assert_eq!(course.title().to_string(), "Intro to Rust");
    }

    #[test]
    fn test_numbers_and_collections_render_as_json() {
        let course = record(json!({"id": 7, "tags": ["a"]}));
        assert_eq!(course.id().to_string(), "7");
        assert_eq!(course.field("tags").to_string(), r#"["a"]"#);
    }

    #[test]
    fn test_null_renders_as_placeholder() {
        let course = record(json!({"id": "x", "title": null}));
        assert_eq!(course.title(), FieldValue::Present(&Value::Null));
        assert_eq!(course.title().to_string(), "None");
    }

    #[test]
    fn test_booleans_render_capitalized() {
        let course = record(json!({"id": true, "title": false}));
        assert_eq!(course.id().to_string(), "True");
        assert_eq!(course.title().to_string(), "False");
    }

    #[test]
    fn test_missing_field_uses_placeholder() {
        let course = record(json!({"id": "no-title"}));
        assert_eq!(course.title(), FieldValue::Missing);
        assert_eq!(course.title().to_string(), "None");
    }

    #[test]
    fn test_summary_omits_missing_fields() {
        let course = record(json!({"title": "Untitled id", "price": 10}));
        let summary = serde_json::to_value(course.summary()).unwrap();
        assert_eq!(summary, json!({"title": "Untitled id"}));
    }

    #[test]
    fn test_summary_keeps_explicit_null() {
        let course = record(json!({"id": null, "title": "T"}));
        let summary = serde_json::to_value(course.summary()).unwrap();
        assert_eq!(summary, json!({"id": null, "title": "T"}));
    }
}
