// src/output/sections.rs

use super::front_matter::file_name;
use crate::core_types::{AnalysisResult, FileStats, TypeDescriptor};
use crate::decode::human_size;
use serde_json::Value;
use std::path::Path;

/// The "File Information" table. Filesystem rows appear only for results
/// read from disk, and only for what the platform reports.
pub(super) fn metadata(path: &Path, descriptor: &TypeDescriptor, result: &AnalysisResult) -> String {
    let lines = &result.line_stats;
    let mut rows = vec![
        ("File", format!("`{}`", file_name(path))),
        ("Path", format!("`{}`", display_path(path))),
        ("Type", format!("{} {}", descriptor.icon, descriptor.name)),
        ("Size", human_size(result.byte_length as u64)),
        ("Encoding", result.encoding.clone()),
        (
            "Lines",
            format!(
                "{} ({} non-blank, {} blank)",
                lines.total_lines, lines.non_blank_lines, lines.blank_lines
            ),
        ),
    ];
    if let Some(file) = &result.file {
        rows.extend(file.permissions.clone().map(|p| ("Permissions", p)));
        rows.extend(file.created.clone().map(|t| ("Created", t)));
        rows.extend(file.modified.clone().map(|t| ("Modified", t)));
    }

    let mut section = String::from("## File Information\n\n| Property | Value |\n|---|---|\n");
    for (property, value) in rows {
        section.push_str(&format!("| **{}** | {} |\n", property, value));
    }
    section
}

/// `path` relative to the working directory when it lies below it, otherwise as given.
fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));
    relative.as_deref().unwrap_or(path).display().to_string()
}

/// The "Statistics" bullet list, or `None` when there is nothing to report.
pub(super) fn statistics(stats: &FileStats) -> Option<String> {
    let fields = match serde_json::to_value(stats) {
        Ok(Value::Object(fields)) => fields,
        _ => return None,
    };
    let mut items = String::new();
    for (key, value) in &fields {
        if key == "kind" {
            continue;
        }
        items.push_str(&format!("- **{}**: {}\n", humanize(key), inline(value)));
    }
    (!items.is_empty()).then(|| format!("## Statistics\n\n{}", items))
}

fn humanize(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}

fn inline(value: &Value) -> String {
    match value {
        Value::Null => "none".to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) if items.is_empty() => "none".to_string(),
        Value::Array(items) => items.iter().map(inline).collect::<Vec<_>>().join(", "),
        Value::Object(map) if map.is_empty() => "none".to_string(),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| format!("{}: {}", k, inline(v)))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    }
}
