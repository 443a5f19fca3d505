// src/constants.rs

/// Files larger than this many bytes are rejected before reading (10 MiB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Number of leading bytes sampled for charset detection.
pub const ENCODING_SAMPLE_SIZE: usize = 8 * 1024;

/// Encoding label used when the detected encoding had to be abandoned.
pub const UTF8_REPLACED_LABEL: &str = "utf-8 (with errors replaced)";

/// Encoding label reported for results that never got as far as decoding.
pub const UNKNOWN_ENCODING_LABEL: &str = "unknown";

/// Default pretty-print indentation for structured formats.
pub const DEFAULT_INDENT: usize = 2;

/// Largest indentation width accepted from configuration.
pub const MAX_INDENT: usize = 16;

/// Nesting level at which structure analysis stops descending.
pub const MAX_ANALYSIS_DEPTH: usize = 256;

/// Number of array elements sampled for `item_types`.
pub const ITEM_TYPE_SAMPLE: usize = 5;

/// Number of mapping keys listed in `top_level_keys`.
pub const TOP_LEVEL_KEY_SAMPLE: usize = 10;

/// Maximum characters of a scalar shown in a structure report.
pub const SCALAR_PREVIEW_CHARS: usize = 100;

/// Header written before re-serialized XML that lacks one.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Separator placed between re-serialized YAML documents.
pub const YAML_DOCUMENT_SEPARATOR: &str = "\n---\n";

/// Default glob excluded from directory inputs, so generated pages are not re-ingested.
pub const DEFAULT_EXCLUDE: &str = "*.md";

/// Suffix appended to an input's file name to name its page.
pub const PAGE_SUFFIX: &str = ".md";
