//! Handles the processing stage of the `docpage` pipeline.
//!
//! This module resolves a file's type, decodes its bytes, hands the text to
//! the code analyzer or the structured processor, and truncates what comes
//! back. Batches are processed in parallel using Rayon; the registry is only
//! read during a batch.

use crate::core_types::{
    AnalysisResult, FileStats, ProcessingOptions, ProcessingPath, SubFormat, Validity,
};
use crate::decode::{decode, file_metadata, line_stats, truncate};
use crate::registry::TypeRegistry;
use log::{debug, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub mod code;
pub mod filters;
pub mod structured;

pub use crate::decode::read_source;

/// Analyzes raw file bytes. Never fails.
///
/// `extension` is the file's own extension (with or without the dot); a
/// `format_override` in `options` takes precedence when it names a registered
/// type. Grammar errors are reported through `validity` and `parse_error`.
///
/// # Examples
///
/// ```
/// use docpage::core_types::{FileStats, JsonShape, ProcessingOptions, StructureStats, Validity};
/// use docpage::processing::process_bytes;
/// use docpage::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
/// let result = process_bytes(
///     &registry,
///     b"{\"key\": \"value\", \"number\": 42}\n",
///     ".json",
///     &ProcessingOptions::default(),
/// );
///
/// assert_eq!(result.validity, Validity::Valid);
/// assert!(matches!(
///     result.stats,
///     FileStats::Structure(StructureStats::Json(JsonShape::Object { keys: 2, .. }))
/// ));
/// ```
pub fn process_bytes(
    registry: &TypeRegistry,
    bytes: &[u8],
    extension: &str,
    options: &ProcessingOptions,
) -> AnalysisResult {
    let format_override = options.format_override.as_deref();
    let descriptor = registry.resolve(extension, format_override);
    let effective = registry.effective_extension(extension, format_override);
    let decoded = decode(bytes, options.encoding.as_deref());
    debug!(
        "Processing {} bytes as {} ({} path, {})",
        bytes.len(),
        descriptor.name,
        descriptor.path,
        decoded.encoding
    );

    let (presented, stats, validity, parse_error) = match descriptor.path {
        ProcessingPath::Code => (
            code::present(&decoded.text),
            FileStats::Language(code::analyze(&decoded.text, &effective)),
            Validity::NotApplicable,
            None,
        ),
        ProcessingPath::Structured => {
            let output = structured::process(
                &decoded.text,
                SubFormat::from_extension(&effective),
                options.indent,
            );
            (
                output.content,
                FileStats::Structure(output.stats),
                output.validity,
                output.parse_error,
            )
        }
    };

    let truncated = truncate(presented, options.max_lines);
    let was_truncated = truncated.was_truncated();
    AnalysisResult {
        byte_length: bytes.len(),
        original_length: decoded.text.chars().count(),
        processed_length: truncated.content.chars().count(),
        content: truncated.content,
        encoding: decoded.encoding,
        line_stats: line_stats(&decoded.text),
        stats,
        was_truncated,
        truncated_at_line: truncated.truncated_at_line,
        validity,
        parse_error,
        error: None,
        file: None,
    }
}

/// Reads and analyzes one file.
///
/// Oversized or unreadable files produce a failed result whose `error` says
/// why; nothing is returned as `Err`. Either way the result carries whatever
/// filesystem metadata could be read.
pub fn process_file(
    registry: &TypeRegistry,
    path: &Path,
    options: &ProcessingOptions,
) -> AnalysisResult {
    let extension = extension_of(path);
    let mut result = match read_source(path, options.max_file_size) {
        Ok(bytes) => process_bytes(registry, &bytes, &extension, options),
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            let descriptor = registry.resolve(&extension, options.format_override.as_deref());
            AnalysisResult::failed(descriptor.path, e)
        }
    };
    result.file = Some(file_metadata(path));
    result
}

/// Analyzes many files in parallel. Results keep the order of `paths`.
pub fn process_files(
    registry: &TypeRegistry,
    paths: &[PathBuf],
    options: &ProcessingOptions,
) -> Vec<(PathBuf, AnalysisResult)> {
    paths
        .par_iter()
        .map(|path| (path.clone(), process_file(registry, path, options)))
        .collect()
}

/// The dot-prefixed extension of `path`, or an empty string when it has none.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
