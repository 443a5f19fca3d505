// src/processing/structured/yaml.rs

use super::tree::{self, TreeValue, View};
use super::StructuredOutput;
use crate::constants::YAML_DOCUMENT_SEPARATOR;
use crate::core_types::{MultiDocumentStats, StructureStats, SubFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_yaml_ng::Value;

/// Indentation the emitter produces, and the range it can be rescaled to.
const EMITTER_INDENT: usize = 2;
const MIN_INDENT: usize = 2;
const MAX_INDENT: usize = 9;

/// A line whose value is a literal or folded block scalar header. Group 2 is
/// the explicit indentation indicator.
static BLOCK_SCALAR_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|: )[|>][-+]?([1-9])?[-+]?$").unwrap());

impl TreeValue for Value {
    fn view(&self) -> View<'_, Self> {
        match self {
            Value::Mapping(map) => View::Mapping(map.iter().map(|(k, v)| (key_text(k), v)).collect()),
            Value::Sequence(items) => View::Sequence(items),
            Value::Tagged(tagged) => tagged.value.view(),
            Value::Null => View::Scalar {
                type_label: "null",
                text: None,
            },
            Value::Bool(b) => View::Scalar {
                type_label: "boolean",
                text: Some(b.to_string()),
            },
            Value::Number(n) => View::Scalar {
                type_label: "number",
                text: Some(n.to_string()),
            },
            Value::String(s) => View::Scalar {
                type_label: "string",
                text: Some(s.clone()),
            },
        }
    }
}

/// Parses a YAML stream and re-emits every document in block style with sorted keys.
pub(super) fn process(content: &str, indent: usize) -> StructuredOutput {
    let documents = match parse_stream(content) {
        Ok(documents) => documents,
        Err(e) => {
            return StructuredOutput::invalid(
                content,
                SubFormat::Yaml,
                format!("YAML parsing error: {}", e),
            )
        }
    };

    let mut rendered = Vec::with_capacity(documents.len());
    for document in &documents {
        match serde_yaml_ng::to_string(document) {
            Ok(text) => rendered.push(reindent(&text, indent)),
            Err(e) => {
                return StructuredOutput::invalid(
                    content,
                    SubFormat::Yaml,
                    format!("YAML parsing error: {}", e),
                )
            }
        }
    }

    let stats = match documents.as_slice() {
        [single] => StructureStats::Tree(tree::analyze(single, SubFormat::Yaml)),
        many => StructureStats::MultiDocument(MultiDocumentStats {
            format: SubFormat::Yaml,
            document_count: many.len(),
            document_types: many.iter().map(|d| d.type_label().to_string()).collect(),
        }),
    };
    StructuredOutput::valid(rendered.join(YAML_DOCUMENT_SEPARATOR), stats)
}

/// Every document in the stream with mapping keys sorted. An empty stream is
/// one null document.
fn parse_stream(content: &str) -> Result<Vec<Value>, serde_yaml_ng::Error> {
    let mut documents = Vec::new();
    for document in serde_yaml_ng::Deserializer::from_str(content) {
        documents.push(sort_keys(Value::deserialize(document)?));
    }
    if documents.is_empty() {
        documents.push(Value::Null);
    }
    Ok(documents)
}

fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml_ng::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Mapping(map) => {
            let mut entries: Vec<(Value, Value)> =
                map.into_iter().map(|(k, v)| (k, sort_keys(v))).collect();
            entries.sort_by_cached_key(|(k, _)| key_text(k));
            Value::Mapping(entries.into_iter().collect())
        }
        Value::Sequence(items) => Value::Sequence(items.into_iter().map(sort_keys).collect()),
        Value::Tagged(mut tagged) => {
            let inner = std::mem::replace(&mut tagged.value, Value::Null);
            tagged.value = sort_keys(inner);
            Value::Tagged(tagged)
        }
        scalar => scalar,
    }
}

/// Rescales the emitter's two-space structure to `indent` spaces.
///
/// Widths outside 2..=9 fall back to 2. Each two columns of leading space and
/// each `- ` sequence marker become one level. Block scalar content keeps any
/// indentation beyond its base, and an explicit indentation indicator is
/// rewritten to match. When a rewritten indicator would leave 1..=9, the
/// emitter's output is returned unchanged.
fn reindent(yaml: &str, indent: usize) -> String {
    if !(MIN_INDENT..=MAX_INDENT).contains(&indent) || indent == EMITTER_INDENT {
        return yaml.to_string();
    }

    let mut out = String::with_capacity(yaml.len() * 2);
    // (header lead, original content base, rescaled content base)
    let mut block: Option<(usize, usize, usize)> = None;

    for line in yaml.split_inclusive('\n') {
        let body = line.trim_start_matches(' ');
        let lead = line.len() - body.len();

        if let Some((header_lead, old_base, new_base)) = block {
            if body.trim().is_empty() {
                out.push_str(body);
                continue;
            }
            if lead > header_lead {
                let new_lead = (new_base + lead).saturating_sub(old_base);
                out.push_str(&" ".repeat(new_lead));
                out.push_str(body);
                continue;
            }
            block = None;
        }

        let mut prefix = " ".repeat(lead / EMITTER_INDENT * indent + lead % EMITTER_INDENT);
        let mut old_prefix = lead;
        let mut rest = body;
        while let Some(after) = rest.strip_prefix("- ") {
            prefix.push('-');
            prefix.push_str(&" ".repeat(indent - 1));
            old_prefix += EMITTER_INDENT;
            rest = after;
        }

        let mut header = None;
        if let Some(captures) = BLOCK_SCALAR_HEADER.captures(rest.trim_end()) {
            let entry = rest.starts_with(['|', '>']);
            let (old_base, new_base) = if entry {
                (old_prefix, prefix.len())
            } else {
                (old_prefix + EMITTER_INDENT, prefix.len() + indent)
            };
            // The indicator counts from the parent node: the key column, or
            // the last `-` for a sequence entry.
            let (old_parent, new_parent) = if entry && old_prefix > lead {
                (old_prefix - EMITTER_INDENT, prefix.len() - indent)
            } else {
                (old_prefix, prefix.len())
            };
            // A document-level scalar keeps its base, so its indicator stands.
            let document_level = entry && old_prefix == lead;
            if let Some(digit) = captures.get(2).filter(|_| !document_level) {
                let old_indicator = old_base.saturating_sub(old_parent);
                let new_indicator = new_base.saturating_sub(new_parent);
                if digit.as_str().parse::<usize>().ok() != Some(old_indicator)
                    || !(1..=9).contains(&new_indicator)
                {
                    return yaml.to_string();
                }
                header = Some(format!(
                    "{}{}{}",
                    &rest[..digit.start()],
                    new_indicator,
                    &rest[digit.end()..]
                ));
            }
            block = Some((lead, old_base, new_base));
        }

        out.push_str(&prefix);
        out.push_str(header.as_deref().unwrap_or(rest));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::{TreeShape, Validity};

    #[test]
    fn test_single_document_sorted() {
        let output = process("zeta: 1\nalpha:\n  b: true\n  a: [1, 2]\n", 2);
        assert_eq!(output.validity, Validity::Valid);
        assert_eq!(output.content, "alpha:\n  a:\n  - 1\n  - 2\n  b: true\nzeta: 1\n");
        match output.stats {
            StructureStats::Tree(stats) => {
                assert_eq!(stats.format, SubFormat::Yaml);
                assert_eq!(
                    stats.shape,
                    TreeShape::Object {
                        keys: 2,
                        max_depth: 3,
                        top_level_keys: vec!["alpha".to_string(), "zeta".to_string()],
                    }
                );
            }
            other => panic!("Expected tree stats, got {:?}", other),
        }
    }

    #[test]
    fn test_multi_document_stream() {
        let output = process("a: 1\n---\n- x\n---\nplain\n", 2);
        assert_eq!(output.validity, Validity::Valid);
        assert_eq!(output.content, "a: 1\n\n---\n- x\n\n---\nplain\n");
        assert_eq!(
            output.stats,
            StructureStats::MultiDocument(MultiDocumentStats {
                format: SubFormat::Yaml,
                document_count: 3,
                document_types: vec![
                    "object".to_string(),
                    "array".to_string(),
                    "string".to_string()
                ],
            })
        );
    }

    #[test]
    fn test_empty_stream_is_single_null_document() {
        let output = process("", 2);
        assert_eq!(output.validity, Validity::Valid);
        match output.stats {
            StructureStats::Tree(stats) => assert_eq!(
                stats.shape,
                TreeShape::Scalar {
                    value_type: "null".to_string(),
                    value: None,
                }
            ),
            other => panic!("Expected tree stats, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_keeps_original() {
        let original = "key: [unclosed\nother: 1\n";
        let output = process(original, 2);
        assert_eq!(output.validity, Validity::Invalid);
        assert_eq!(output.content, original);
        assert!(output
            .parse_error
            .unwrap_or_default()
            .starts_with("YAML parsing error: "));
    }

    #[test]
    fn test_reindent_mappings_and_sequences() {
        let emitted = "a:\n  b:\n  - c: 1\n    d: 2\n  - - x\n";
        let expected = "a:\n    b:\n    -   c: 1\n        d: 2\n    -   -   x\n";
        assert_eq!(reindent(emitted, 4), expected);
        let reparsed: Value = serde_yaml_ng::from_str(expected).unwrap();
        let original: Value = serde_yaml_ng::from_str(emitted).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_reindent_block_scalar_keeps_inner_indent() {
        let emitted = "a:\n  text: |-\n    line one\n      nested\n\n    last\n  z: 1\n";
        let rescaled = reindent(emitted, 4);
        assert_eq!(
            rescaled,
            "a:\n    text: |-\n        line one\n          nested\n\n        last\n    z: 1\n"
        );
        let reparsed: Value = serde_yaml_ng::from_str(&rescaled).unwrap();
        let original: Value = serde_yaml_ng::from_str(emitted).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_reindent_rewrites_indentation_indicator() {
        let emitted = "a:\n  t: |2\n      lead\n    x\n";
        let rescaled = reindent(emitted, 4);
        assert_eq!(rescaled, "a:\n    t: |4\n          lead\n        x\n");
        let reparsed: Value = serde_yaml_ng::from_str(&rescaled).unwrap();
        let original: Value = serde_yaml_ng::from_str(emitted).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_reindent_indicator_on_sequence_entry() {
        let emitted = "- |2-\n    lead\n  x\n- b\n";
        let rescaled = reindent(emitted, 4);
        assert_eq!(rescaled, "-   |4-\n      lead\n    x\n-   b\n");
        let reparsed: Value = serde_yaml_ng::from_str(&rescaled).unwrap();
        let original: Value = serde_yaml_ng::from_str(emitted).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_reindent_indicator_at_widest_indent() {
        let emitted = "a:\n  t: |2\n      lead\n    x\n";
        let rescaled = reindent(emitted, 9);
        assert!(rescaled.contains("t: |9\n"), "{}", rescaled);
        let reparsed: Value = serde_yaml_ng::from_str(&rescaled).unwrap();
        let original: Value = serde_yaml_ng::from_str(emitted).unwrap();
        assert_eq!(reparsed, original);
    }

    #[test]
    fn test_reindent_unexpected_indicator_keeps_emitter_output() {
        let emitted = "a:\n  t: |3\n       lead\n     x\n";
        assert_eq!(reindent(emitted, 4), emitted);
    }

    #[test]
    fn test_document_level_indicator_is_untouched() {
        let emitted = "|2\n  lead\nx\n";
        assert_eq!(reindent(emitted, 4), emitted);
    }

    #[test]
    fn test_reindent_out_of_range_is_ignored() {
        let emitted = "a:\n  b: 1\n";
        assert_eq!(reindent(emitted, 0), emitted);
        assert_eq!(reindent(emitted, 1), emitted);
        assert_eq!(reindent(emitted, 12), emitted);
    }

    #[test]
    fn test_leading_space_strings_round_trip() {
        let source = "a:\n  t: \"  lead\\nx\\n\"\n  u: \" both\\n  sides \"\nlist:\n- \"   deep\\nshallow\\n\"\n";
        let original: Value = serde_yaml_ng::from_str(source).unwrap();
        for indent in [2, 3, 4, 8] {
            let output = process(source, indent);
            assert_eq!(output.validity, Validity::Valid);
            let reparsed: Value = serde_yaml_ng::from_str(&output.content).unwrap();
            assert_eq!(reparsed, original, "indent {}:\n{}", indent, output.content);
        }
    }

    #[test]
    fn test_process_with_wide_indent_round_trips() {
        let source = "root:\n  list:\n    - name: one\n      tags: [a, b]\n    - name: two\n";
        let output = process(source, 4);
        assert_eq!(output.validity, Validity::Valid);
        let reparsed: Value = serde_yaml_ng::from_str(&output.content).unwrap();
        let original: Value = serde_yaml_ng::from_str(source).unwrap();
        assert_eq!(reparsed, original);
    }
}
