// src/output/mod.rs

//! Renders an `AnalysisResult` as a Markdown documentation page.
//!
//! A page is YAML front matter, a title, optional file information and
//! statistics sections, and the presented content in a fenced block. Pages
//! use MkDocs-style admonitions (`!!! note`) for parse errors and truncation.

use crate::core_types::{AnalysisResult, TypeDescriptor, Validity};
use crate::decode::format_time;
use anyhow::Result;
use log::debug;
use std::path::Path;
use std::time::SystemTime;

mod content_block;
mod formats;
mod front_matter;
mod sections;
pub mod writer;

pub use formats::write_format_list;
pub use writer::write_page;

/// Page-level settings shared by every file in a run.
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    /// Replaces the generated title.
    pub title: Option<String>,
    /// Replaces the generated description.
    pub description: Option<String>,
    /// Replaces the generated tags.
    pub tags: Option<Vec<String>>,
    pub include_metadata: bool,
    pub include_stats: bool,
    /// Adds `linenums="1"` to the content fence.
    pub line_numbers: bool,
    /// Ends the page with the time it was generated.
    pub include_timestamp: bool,
    /// Extra front matter keys, applied after the generated ones.
    pub front_matter: serde_json::Map<String, serde_json::Value>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            tags: None,
            include_metadata: true,
            include_stats: true,
            line_numbers: true,
            include_timestamp: true,
            front_matter: serde_json::Map::new(),
        }
    }
}

/// Renders the page for one processed file.
///
/// `path` is only used for naming (title, description, tags, file name); the
/// file is not touched.
///
/// # Examples
///
/// ```
/// use docpage::output::{render_page, PageOptions};
/// use docpage::processing::process_bytes;
/// use docpage::core_types::ProcessingOptions;
/// use docpage::registry::TypeRegistry;
/// use std::path::Path;
///
/// # fn main() -> anyhow::Result<()> {
/// let registry = TypeRegistry::new();
/// let result = process_bytes(&registry, b"[1, 2]", ".json", &ProcessingOptions::default());
/// let page = render_page(
///     Path::new("sample_data.json"),
///     &registry.resolve(".json", None),
///     &result,
///     &PageOptions::default(),
/// )?;
///
/// assert!(page.starts_with("---\ntitle: Sample Data (JSON)\n"));
/// assert!(page.contains("\n# Sample Data (JSON)\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_page(
    path: &Path,
    descriptor: &TypeDescriptor,
    result: &AnalysisResult,
    options: &PageOptions,
) -> Result<String> {
    let title = options
        .title
        .clone()
        .unwrap_or_else(|| front_matter::default_title(path, descriptor));
    let description = options
        .description
        .clone()
        .unwrap_or_else(|| front_matter::default_description(path, descriptor));
    let tags = options
        .tags
        .clone()
        .unwrap_or_else(|| front_matter::default_tags(path, descriptor));
    debug!("Rendering page '{}' for {}", title, path.display());

    let mut parts = vec![
        front_matter::render(&title, &description, &tags, &options.front_matter)?,
        format!("# {}\n\n{}\n", title, description),
    ];
    if options.include_metadata {
        parts.push(sections::metadata(path, descriptor, result));
    }
    if options.include_stats {
        parts.extend(sections::statistics(&result.stats));
    }

    if let Some(error) = &result.error {
        parts.push(admonition("failure", "Processing failed", error));
    } else {
        if result.validity == Validity::Invalid {
            if let Some(parse_error) = &result.parse_error {
                parts.push(admonition("warning", "Parse error", parse_error));
            }
        }
        parts.push(content_block::render(
            &descriptor.highlight,
            result,
            options.line_numbers,
        ));
    }
    if options.include_timestamp {
        parts.push(footer(SystemTime::now()));
    }
    Ok(parts.join("\n"))
}

fn footer(generated: SystemTime) -> String {
    format!(
        "_Generated by docpage {} on {}._\n",
        env!("CARGO_PKG_VERSION"),
        format_time(generated)
    )
}

fn admonition(kind: &str, heading: &str, body: &str) -> String {
    let mut block = format!("!!! {} \"{}\"\n", kind, heading);
    for line in body.lines() {
        if line.trim().is_empty() {
            block.push('\n');
        } else {
            block.push_str("    ");
            block.push_str(line);
            block.push('\n');
        }
    }
    block
}
