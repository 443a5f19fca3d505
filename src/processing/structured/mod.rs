//! Parsing, re-serialization, and summaries for structured data formats.
//!
//! Grammar errors never escape this module as `Err`: an unparseable file
//! keeps its original text, is marked `Validity::Invalid`, and carries the
//! parser's message so a page can still show it.

use crate::core_types::{StructureStats, SubFormat, Validity};
use log::debug;

mod ini;
mod json;
mod toml;
mod tree;
mod unknown;
mod xml;
mod yaml;

/// Presented content and findings for one structured file.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredOutput {
    /// Re-serialized content for JSON, XML and YAML when they parse; otherwise
    /// the original text.
    pub content: String,
    pub stats: StructureStats,
    pub validity: Validity,
    pub parse_error: Option<String>,
}

impl StructuredOutput {
    fn valid(content: String, stats: StructureStats) -> Self {
        Self {
            content,
            stats,
            validity: Validity::Valid,
            parse_error: None,
        }
    }

    fn invalid(original: &str, format: SubFormat, parse_error: String) -> Self {
        debug!("{} content is invalid: {}", format, parse_error);
        let note = match format {
            SubFormat::Ini => "Invalid configuration format".to_string(),
            other => format!("Invalid {}", other),
        };
        Self {
            content: original.to_string(),
            stats: StructureStats::Unparsed { format, note },
            validity: Validity::Invalid,
            parse_error: Some(parse_error),
        }
    }
}

/// Parses `content` under `format`, re-serializing where the format supports it.
///
/// `indent` is the number of spaces per nesting level for JSON, XML and YAML
/// output. TOML and INI content is validated but never rewritten.
///
/// # Examples
///
/// ```
/// use docpage::core_types::{SubFormat, Validity};
/// use docpage::processing::structured::process;
///
/// let output = process(r#"{"b": 1, "a": 2}"#, SubFormat::Json, 2);
/// assert_eq!(output.validity, Validity::Valid);
/// assert_eq!(output.content, "{\n  \"a\": 2,\n  \"b\": 1\n}");
///
/// let broken = process("<a><b></a>", SubFormat::Xml, 2);
/// assert_eq!(broken.validity, Validity::Invalid);
/// assert_eq!(broken.content, "<a><b></a>");
/// ```
pub fn process(content: &str, format: SubFormat, indent: usize) -> StructuredOutput {
    debug!("Processing structured content as {}", format);
    match format {
        SubFormat::Json => json::process(content, indent),
        SubFormat::Xml => xml::process(content, indent),
        SubFormat::Yaml => yaml::process(content, indent),
        SubFormat::Toml => toml::process(content),
        SubFormat::Ini => ini::process(content),
        SubFormat::Unknown => unknown::process(content),
    }
}
