// src/processing/structured/toml.rs

use super::StructuredOutput;
use crate::core_types::{StructureStats, SubFormat};

#[cfg(feature = "toml")]
use super::tree::{self, TreeValue, View};

#[cfg(feature = "toml")]
impl TreeValue for toml::Value {
    fn view(&self) -> View<'_, Self> {
        match self {
            toml::Value::Table(table) => {
                View::Mapping(table.iter().map(|(k, v)| (k.clone(), v)).collect())
            }
            toml::Value::Array(items) => View::Sequence(items),
            toml::Value::String(s) => View::Scalar {
                type_label: "string",
                text: Some(s.clone()),
            },
            toml::Value::Integer(n) => View::Scalar {
                type_label: "number",
                text: Some(n.to_string()),
            },
            toml::Value::Float(f) => View::Scalar {
                type_label: "number",
                text: Some(f.to_string()),
            },
            toml::Value::Boolean(b) => View::Scalar {
                type_label: "boolean",
                text: Some(b.to_string()),
            },
            toml::Value::Datetime(dt) => View::Scalar {
                type_label: "datetime",
                text: Some(dt.to_string()),
            },
        }
    }
}

/// Validates TOML and summarizes it. The original text is always kept.
#[cfg(feature = "toml")]
pub(super) fn process(content: &str) -> StructuredOutput {
    match toml::from_str::<toml::Table>(content) {
        Ok(table) => {
            let root = toml::Value::Table(table);
            let stats = tree::analyze(&root, SubFormat::Toml);
            StructuredOutput::valid(content.to_string(), StructureStats::Tree(stats))
        }
        Err(e) => StructuredOutput::invalid(content, SubFormat::Toml, describe_error(content, &e)),
    }
}

#[cfg(feature = "toml")]
fn describe_error(content: &str, e: &toml::de::Error) -> String {
    let message = e.message().trim_end();
    match e.span() {
        Some(span) => {
            let before = content.get(..span.start).unwrap_or(content);
            let line = before.matches('\n').count() + 1;
            let column = before.rsplit('\n').next().map_or(0, |l| l.chars().count()) + 1;
            format!(
                "TOML parsing error: {} (line {}, column {})",
                message, line, column
            )
        }
        None => format!("TOML parsing error: {}", message),
    }
}

/// Built without TOML support: the file cannot be checked.
#[cfg(not(feature = "toml"))]
pub(super) fn process(content: &str) -> StructuredOutput {
    log::warn!("TOML support is not compiled in; reporting file as unvalidated");
    StructuredOutput {
        content: content.to_string(),
        stats: StructureStats::Unparsed {
            format: SubFormat::Toml,
            note: "TOML parsing requires the `toml` feature".to_string(),
        },
        validity: crate::core_types::Validity::Invalid,
        parse_error: Some("TOML parser not available".to_string()),
    }
}
