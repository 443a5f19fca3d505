//! Heuristic line-based analysis of source files.
//!
//! Each line is classified by pattern matching against a per-language table.
//! This is deliberately not a parser: a function-like line inside a string
//! literal is counted as a function.

use crate::core_types::LanguageStats;
use crate::processing::filters::code_path_filters;
use log::debug;

mod patterns;

use patterns::{patterns_for, LanguagePatterns};

/// Prepares code-path content for embedding in a fenced block.
pub fn present(content: &str) -> String {
    code_path_filters()
        .iter()
        .fold(content.to_string(), |acc, filter| {
            debug!("Applying filter '{}'", filter.name());
            filter.apply(&acc)
        })
}

/// Counts comments, imports, functions, classes, and docstrings in `content`.
///
/// `extension` selects the pattern table (any case, with or without the dot).
/// Unknown extensions only get comment counting with `#`, `//`, and `--`.
///
/// # Examples
///
/// ```
/// use docpage::processing::code::analyze;
///
/// let source = "import os\n\n# helper\ndef foo():\n    return 1\n";
/// let stats = analyze(source, ".py");
/// assert_eq!(stats.import_statements, 1);
/// assert_eq!(stats.comment_lines, 1);
/// assert_eq!(stats.function_definitions, 1);
/// assert_eq!(stats.comment_percentage, 25.0);
/// ```
pub fn analyze(content: &str, extension: &str) -> LanguageStats {
    let extension = normalize(extension);
    let patterns = patterns_for(&extension);
    let mut stats = LanguageStats::default();
    let mut code_lines = 0usize;
    let mut in_block = false;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if patterns.docstrings && (trimmed.contains(r#"""""#) || trimmed.contains("'''")) {
            stats.docstring_blocks += 1;
        }

        if let Some((start, end)) = patterns.block_comment {
            if trimmed.contains(start) {
                in_block = true;
            }
            if in_block {
                stats.comment_lines += 1;
                if trimmed.contains(end) {
                    in_block = false;
                }
                continue;
            }
        }

        if patterns.is_line_comment(trimmed) {
            stats.comment_lines += 1;
            continue;
        }

        code_lines += 1;
        classify(trimmed, patterns, &mut stats);
    }

    stats.comment_percentage = percentage(stats.comment_lines, code_lines);
    stats
}

fn classify(trimmed: &str, patterns: &LanguagePatterns, stats: &mut LanguageStats) {
    if patterns.imports.iter().any(|re| re.is_match(trimmed)) {
        stats.import_statements += 1;
    }
    if patterns.functions.iter().any(|re| re.is_match(trimmed)) {
        stats.function_definitions += 1;
    }
    if patterns.classes.iter().any(|re| re.is_match(trimmed)) {
        stats.class_definitions += 1;
    }
}

fn normalize(extension: &str) -> String {
    let lower = extension.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}

/// Comment share of all classified lines, rounded to one decimal.
fn percentage(comment_lines: usize, code_lines: usize) -> f64 {
    let total = comment_lines + code_lines;
    if total == 0 {
        return 0.0;
    }
    let raw = comment_lines as f64 * 100.0 / total as f64;
    (raw * 10.0).round() / 10.0
}
