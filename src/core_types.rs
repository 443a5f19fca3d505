//! Defines core data structures used throughout the processing pipeline.
//!
//! `TypeDescriptor` is what the registry hands out, `ProcessingOptions` is what
//! the caller hands in, and `AnalysisResult` is what comes back out for every
//! processed file.

use crate::constants::{DEFAULT_INDENT, DEFAULT_MAX_FILE_SIZE, UNKNOWN_ENCODING_LABEL};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Which analyzer handles a file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingPath {
    /// Source code and plain text: decoded, sanitized, analyzed line by line.
    Code,
    /// Data formats: parsed, re-serialized where supported, summarized.
    Structured,
}

impl ProcessingPath {
    /// Lowercase label, also used as a page tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingPath::Code => "code",
            ProcessingPath::Structured => "structured",
        }
    }
}

impl fmt::Display for ProcessingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display and dispatch metadata for one file extension.
///
/// Descriptors are never modified once built. A format override produces a
/// fresh descriptor instead of editing the registered one.
///
/// # Examples
///
/// ```
/// use docpage::core_types::{ProcessingPath, TypeDescriptor};
///
/// let descriptor = TypeDescriptor::new("Pipeline", "🔀", "json", ProcessingPath::Structured)
///     .with_mime_type("application/json")
///     .with_description("Pipeline definition");
///
/// assert_eq!(descriptor.highlight, "json");
/// assert_eq!(descriptor.mime_type.as_deref(), Some("application/json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    /// Display name, e.g. "Python".
    pub name: String,
    /// Icon glyph shown next to the name.
    pub icon: String,
    /// Syntax-highlighting language tag for the fenced block.
    pub highlight: String,
    /// Which analyzer handles this type.
    pub path: ProcessingPath,
    /// MIME type, if known.
    pub mime_type: Option<String>,
    /// One-line description.
    pub description: Option<String>,
}

impl TypeDescriptor {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        highlight: impl Into<String>,
        path: ProcessingPath,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            highlight: highlight.into(),
            path,
            mime_type: None,
            description: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// The grammar selected for a file on the structured path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SubFormat {
    #[serde(rename = "JSON")]
    Json,
    #[serde(rename = "XML")]
    Xml,
    #[serde(rename = "YAML")]
    Yaml,
    #[serde(rename = "TOML")]
    Toml,
    #[serde(rename = "INI")]
    Ini,
    #[serde(rename = "unknown")]
    Unknown,
}

impl SubFormat {
    /// Maps an extension (with or without the leading dot, any case) to its grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpage::core_types::SubFormat;
    ///
    /// assert_eq!(SubFormat::from_extension(".YML"), SubFormat::Yaml);
    /// assert_eq!(SubFormat::from_extension("properties"), SubFormat::Ini);
    /// assert_eq!(SubFormat::from_extension(".pom"), SubFormat::Unknown);
    /// ```
    pub fn from_extension(extension: &str) -> Self {
        let ext = extension.trim_start_matches('.').to_lowercase();
        match ext.as_str() {
            "json" => SubFormat::Json,
            "xml" => SubFormat::Xml,
            "yaml" | "yml" => SubFormat::Yaml,
            "toml" => SubFormat::Toml,
            "ini" | "cfg" | "conf" | "properties" => SubFormat::Ini,
            _ => SubFormat::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubFormat::Json => "JSON",
            SubFormat::Xml => "XML",
            SubFormat::Yaml => "YAML",
            SubFormat::Toml => "TOML",
            SubFormat::Ini => "INI",
            SubFormat::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SubFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Caller-supplied settings for processing a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingOptions {
    /// Keep at most this many lines of the presented content.
    pub max_lines: Option<usize>,
    /// Decode with this encoding label instead of detecting one.
    pub encoding: Option<String>,
    /// Indentation width for re-serialized structured content.
    pub indent: usize,
    /// Reinterpret the file as this type (e.g. "json" for a `.slp` file).
    pub format_override: Option<String>,
    /// Files larger than this many bytes are rejected unread.
    pub max_file_size: u64,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            max_lines: None,
            encoding: None,
            indent: DEFAULT_INDENT,
            format_override: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Line counts of the decoded, untruncated content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total_lines: usize,
    pub blank_lines: usize,
    pub non_blank_lines: usize,
}

/// Heuristic statistics for a file on the code path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LanguageStats {
    pub comment_lines: usize,
    pub import_statements: usize,
    pub function_definitions: usize,
    pub class_definitions: usize,
    pub docstring_blocks: usize,
    /// Share of comment lines among non-blank lines, one decimal place.
    pub comment_percentage: f64,
}

/// Shape of a parsed JSON value, one level deep.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum JsonShape {
    Object {
        keys: usize,
        depth: usize,
        /// Type label of each member, keyed by member name.
        nested_types: BTreeMap<String, String>,
    },
    Array {
        length: usize,
        depth: usize,
        /// Type labels of the first few elements.
        item_types: Vec<String>,
    },
    String {
        length: usize,
    },
    Number {
        value: serde_json::Number,
    },
    Boolean {
        value: bool,
    },
    Null,
}

/// Shape of a parsed YAML or TOML document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeShape {
    Object {
        keys: usize,
        max_depth: usize,
        top_level_keys: Vec<String>,
    },
    Array {
        length: usize,
        max_depth: usize,
        item_types: Vec<String>,
    },
    Scalar {
        value_type: String,
        value: Option<String>,
    },
}

/// Depth summary produced by the generic tree analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeStats {
    pub format: SubFormat,
    #[serde(flatten)]
    pub shape: TreeShape,
    /// True when analysis stopped descending at the depth limit.
    pub depth_limited: bool,
}

/// Summary of a YAML stream holding more than one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiDocumentStats {
    pub format: SubFormat,
    pub document_count: usize,
    pub document_types: Vec<String>,
}

/// Summary of a parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XmlStats {
    pub root_tag: String,
    pub total_elements: usize,
    pub max_depth: usize,
    pub root_attributes: usize,
    /// Namespace declarations on the root, keyed by prefix (`default` for `xmlns`).
    pub namespaces: BTreeMap<String, String>,
}

/// Summary of an INI-style configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IniStats {
    pub sections: Vec<String>,
    pub section_count: usize,
    pub total_options: usize,
}

/// Coarse pattern detection for structured files with no known grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternStats {
    pub patterns_detected: Vec<String>,
}

/// Statistics for a file on the structured path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructureStats {
    Json(JsonShape),
    Xml(XmlStats),
    Tree(TreeStats),
    MultiDocument(MultiDocumentStats),
    Ini(IniStats),
    Patterns(PatternStats),
    /// The content could not be analyzed; `note` says why.
    Unparsed { format: SubFormat, note: String },
    /// Nothing was read, so there is nothing to describe.
    Unavailable,
}

/// Format-specific statistics attached to a result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileStats {
    Language(LanguageStats),
    Structure(StructureStats),
}

/// Outcome of grammar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    Valid,
    Invalid,
    /// Structured, but no grammar was checked.
    Unknown,
    /// Code files are never validated.
    NotApplicable,
}

impl Validity {
    /// `Some(true)`/`Some(false)` when a grammar was checked, `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Validity::Valid => Some(true),
            Validity::Invalid => Some(false),
            Validity::Unknown | Validity::NotApplicable => None,
        }
    }
}

/// Filesystem details of a processed file. A field is `None` when the
/// platform or filesystem does not report it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    /// Mode string such as `-rw-r--r--`; `read-only` or `read-write` off Unix.
    pub permissions: Option<String>,
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub created: Option<String>,
    pub modified: Option<String>,
}

/// Everything the core learned about one file.
///
/// Produced fresh for each call and owned entirely by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Presented content: sanitized, re-serialized and/or truncated.
    pub content: String,
    /// Bytes read from the source.
    pub byte_length: usize,
    /// Characters in the decoded input.
    pub original_length: usize,
    /// Characters in `content`.
    pub processed_length: usize,
    /// Encoding the bytes were decoded with.
    pub encoding: String,
    /// Line counts of the decoded input (before any truncation).
    pub line_stats: LineStats,
    pub stats: FileStats,
    pub was_truncated: bool,
    pub truncated_at_line: Option<usize>,
    pub validity: Validity,
    /// Grammar error for invalid structured files.
    pub parse_error: Option<String>,
    /// Set when the file could not be processed at all.
    pub error: Option<String>,
    /// Present when the result came from a file on disk.
    pub file: Option<FileMetadata>,
}

impl AnalysisResult {
    /// Builds the record returned when a file could not be read or decoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpage::core_types::{AnalysisResult, ProcessingPath, Validity};
    ///
    /// let failed = AnalysisResult::failed(ProcessingPath::Structured, "too big");
    /// assert!(failed.is_failure());
    /// assert!(failed.content.is_empty());
    /// assert_eq!(failed.validity, Validity::Invalid);
    /// ```
    pub fn failed(path: ProcessingPath, error: impl fmt::Display) -> Self {
        let (stats, validity) = match path {
            ProcessingPath::Code => (
                FileStats::Language(LanguageStats::default()),
                Validity::NotApplicable,
            ),
            ProcessingPath::Structured => (
                FileStats::Structure(StructureStats::Unavailable),
                Validity::Invalid,
            ),
        };
        Self {
            content: String::new(),
            byte_length: 0,
            original_length: 0,
            processed_length: 0,
            encoding: UNKNOWN_ENCODING_LABEL.to_string(),
            line_stats: LineStats::default(),
            stats,
            was_truncated: false,
            truncated_at_line: None,
            validity,
            parse_error: None,
            error: Some(error.to_string()),
            file: None,
        }
    }

    /// True when the file was not processed (size limit, I/O, decode).
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
