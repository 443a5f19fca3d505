// src/processing/structured/unknown.rs

use super::StructuredOutput;
use crate::core_types::{PatternStats, StructureStats, Validity};

/// Reports coarse structural hints for content with no known grammar.
pub(super) fn process(content: &str) -> StructuredOutput {
    StructuredOutput {
        content: content.to_string(),
        stats: StructureStats::Patterns(detect_patterns(content)),
        validity: Validity::Unknown,
        parse_error: None,
    }
}

fn detect_patterns(content: &str) -> PatternStats {
    let checks: [(&str, bool); 3] = [
        (
            "JSON-like braces",
            content.contains('{') && content.contains('}'),
        ),
        ("XML-like tags", content.contains('<') && content.contains('>')),
        (
            "Key-value pairs",
            content.contains(':') && content.contains('\n'),
        ),
    ];
    PatternStats {
        patterns_detected: checks
            .into_iter()
            .filter(|(_, found)| *found)
            .map(|(label, _)| label.to_string())
            .collect(),
    }
}
