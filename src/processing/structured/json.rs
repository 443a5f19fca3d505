// src/processing/structured/json.rs

use super::StructuredOutput;
use crate::constants::ITEM_TYPE_SAMPLE;
use crate::core_types::{JsonShape, StructureStats, SubFormat};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

/// Parses JSON strictly and re-serializes it with sorted keys.
pub(super) fn process(content: &str, indent: usize) -> StructuredOutput {
    let value: Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => return StructuredOutput::invalid(content, SubFormat::Json, describe_error(&e)),
    };

    match to_pretty(&value, indent) {
        Ok(pretty) => StructuredOutput::valid(pretty, StructureStats::Json(shape(&value))),
        Err(e) => StructuredOutput::invalid(content, SubFormat::Json, describe_error(&e)),
    }
}

/// Pretty-prints `value` with `indent` spaces per level.
///
/// Object keys come out sorted because `serde_json::Map` is ordered by key.
fn to_pretty(value: &Value, indent: usize) -> serde_json::Result<String> {
    let indent = b" ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn describe_error(e: &serde_json::Error) -> String {
    let full = e.to_string();
    let location = format!(" at line {} column {}", e.line(), e.column());
    let message = full.strip_suffix(&location).unwrap_or(&full);
    format!(
        "JSON parsing error at line {}, column {}: {}",
        e.line(),
        e.column(),
        message
    )
}

fn type_label(value: &Value) -> &'static str {
    match value {
        Value::Object(_) => "object",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Null => "null",
    }
}

/// One level of structure: the value itself and the type of each child.
fn shape(value: &Value) -> JsonShape {
    match value {
        Value::Object(map) => JsonShape::Object {
            keys: map.len(),
            depth: 0,
            nested_types: map
                .iter()
                .map(|(key, child)| (key.clone(), type_label(child).to_string()))
                .collect(),
        },
        Value::Array(items) => JsonShape::Array {
            length: items.len(),
            depth: 0,
            item_types: items
                .iter()
                .take(ITEM_TYPE_SAMPLE)
                .map(|item| type_label(item).to_string())
                .collect(),
        },
        Value::String(s) => JsonShape::String {
            length: s.chars().count(),
        },
        Value::Number(n) => JsonShape::Number { value: n.clone() },
        Value::Bool(b) => JsonShape::Boolean { value: *b },
        Value::Null => JsonShape::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Validity;
    use std::collections::BTreeMap;

    #[test]
    fn test_object_is_sorted_and_indented() -> serde_json::Result<()> {
        let output = process(r#"{"key": "value", "number": 42}"#, 2);
        assert_eq!(output.validity, Validity::Valid);
        assert_eq!(output.content, "{\n  \"key\": \"value\",\n  \"number\": 42\n}");

        let reparsed: Value = serde_json::from_str(&output.content)?;
        assert_eq!(reparsed, serde_json::json!({"key": "value", "number": 42}));

        match output.stats {
            StructureStats::Json(JsonShape::Object {
                keys, nested_types, ..
            }) => {
                assert_eq!(keys, 2);
                assert_eq!(
                    nested_types,
                    BTreeMap::from([
                        ("key".to_string(), "string".to_string()),
                        ("number".to_string(), "number".to_string()),
                    ])
                );
            }
            other => panic!("Expected JSON object stats, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_keys_are_sorted() {
        let output = process(r#"{"b": 1, "a": {"d": true, "c": null}}"#, 4);
        assert_eq!(
            output.content,
            "{\n    \"a\": {\n        \"c\": null,\n        \"d\": true\n    },\n    \"b\": 1\n}"
        );
    }

    #[test]
    fn test_reserializing_canonical_output_is_stable() {
        let first = process(r#"[{"z": [1, 2.5, "é"], "a": {}}, null]"#, 3);
        let second = process(&first.content, 3);
        assert_eq!(first.content, second.content);
    }

    #[test]
    fn test_zero_indent_keeps_newlines() {
        assert_eq!(process("[1,2]", 0).content, "[\n1,\n2\n]");
    }

    #[test]
    fn test_invalid_json_keeps_original_text() {
        let original = "{\n  \"a\": 1,\n  \"b\": \n}";
        let output = process(original, 2);
        assert_eq!(output.validity, Validity::Invalid);
        assert_eq!(output.content, original);
        let error = output.parse_error.unwrap_or_default();
        assert!(error.starts_with("JSON parsing error at line 4, column 1: "), "{}", error);
        assert!(!error.ends_with("column 1"));
        assert_eq!(
            output.stats,
            StructureStats::Unparsed {
                format: SubFormat::Json,
                note: "Invalid JSON".to_string(),
            }
        );
    }

    #[test]
    fn test_scalar_shapes() {
        assert_eq!(shape(&serde_json::json!("héllo")), JsonShape::String { length: 5 });
        assert_eq!(shape(&serde_json::json!(true)), JsonShape::Boolean { value: true });
        assert_eq!(shape(&Value::Null), JsonShape::Null);
    }

    #[test]
    fn test_array_item_types_are_sampled() {
        let output = process("[1, \"a\", [], {}, null, false, 7]", 2);
        match output.stats {
            StructureStats::Json(JsonShape::Array {
                length, item_types, ..
            }) => {
                assert_eq!(length, 7);
                assert_eq!(item_types, vec!["number", "string", "array", "object", "null"]);
            }
            other => panic!("Expected JSON array stats, got {:?}", other),
        }
    }
}
