// src/processing/code/patterns.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Line-oriented heuristics for one language.
#[derive(Debug)]
pub(super) struct LanguagePatterns {
    pub single_line_comment: &'static [&'static str],
    /// Start and end delimiters of block comments.
    pub block_comment: Option<(&'static str, &'static str)>,
    pub imports: Vec<Regex>,
    pub functions: Vec<Regex>,
    pub classes: Vec<Regex>,
    /// Count lines holding triple quotes as docstring blocks.
    pub docstrings: bool,
}

impl LanguagePatterns {
    fn new(
        single_line_comment: &'static [&'static str],
        block_comment: Option<(&'static str, &'static str)>,
        imports: &[&str],
        functions: &[&str],
        classes: &[&str],
    ) -> Self {
        Self {
            single_line_comment,
            block_comment,
            imports: compile(imports),
            functions: compile(functions),
            classes: compile(classes),
            docstrings: false,
        }
    }

    fn with_docstrings(mut self) -> Self {
        self.docstrings = true;
        self
    }

    /// True when the trimmed line starts with a single-line comment marker.
    pub fn is_line_comment(&self, trimmed: &str) -> bool {
        self.single_line_comment
            .iter()
            .any(|marker| trimmed.starts_with(marker))
    }
}

// Every pattern is anchored at the start of the trimmed line.
fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

const C_BLOCK: Option<(&str, &str)> = Some(("/*", "*/"));
const C_INCLUDE: &str = r#"^#include\s*[<"]"#;
const C_FUNCTION: &str = r"^\w+\s+\w+\s*\(.*\)\s*\{?$";

static LANGUAGES: Lazy<HashMap<&'static str, LanguagePatterns>> = Lazy::new(|| {
    HashMap::from([
        (
            ".py",
            LanguagePatterns::new(
                &["#"],
                Some((r#"""""#, r#"""""#)),
                &[r"^(import\s+\w+|from\s+\w+\s+import)"],
                &[r"^def\s+\w+\s*\("],
                &[r"^class\s+\w+"],
            )
            .with_docstrings(),
        ),
        (
            ".java",
            LanguagePatterns::new(
                &["//"],
                C_BLOCK,
                &[r"^import\s+[\w.]+;"],
                &[r"^\s*(public|private|protected)?\s*(static\s+)?\w+\s+\w+\s*\("],
                &[r"^(public\s+)?(abstract\s+)?class\s+\w+"],
            ),
        ),
        (
            ".js",
            LanguagePatterns::new(
                &["//"],
                C_BLOCK,
                &[r"^(import\s+.*from|const\s+.*=\s*require)"],
                &[r"^(function\s+\w+|const\s+\w+\s*=.*=>|\w+\s*:\s*function)"],
                &[r"^class\s+\w+"],
            ),
        ),
        (
            ".ts",
            LanguagePatterns::new(
                &["//"],
                C_BLOCK,
                &[r"^import\s+.*from"],
                &[r"^(function\s+\w+|const\s+\w+\s*=.*=>|\w+\s*:\s*\(.*\)\s*=>)"],
                &[r"^(export\s+)?(abstract\s+)?class\s+\w+"],
            ),
        ),
        (
            ".c",
            LanguagePatterns::new(&["//"], C_BLOCK, &[C_INCLUDE], &[C_FUNCTION], &[]),
        ),
        (
            ".cpp",
            LanguagePatterns::new(
                &["//"],
                C_BLOCK,
                &[C_INCLUDE],
                &[C_FUNCTION],
                &[r"^class\s+\w+"],
            ),
        ),
        (
            ".go",
            LanguagePatterns::new(
                &["//"],
                C_BLOCK,
                &[r#"^import\s+[(".]"#],
                &[r"^func\s+(\w+\s+)?\w+\s*\("],
                &[r"^type\s+\w+\s+struct"],
            ),
        ),
        (
            ".rs",
            LanguagePatterns::new(
                &["//"],
                C_BLOCK,
                &[r"^use\s+[\w:]+"],
                &[r"^(pub\s+)?fn\s+\w+"],
                &[r"^(pub\s+)?struct\s+\w+"],
            ),
        ),
        (
            ".sh",
            LanguagePatterns::new(
                &["#"],
                None,
                &[r"^(source\s+|\.?\s+)"],
                &[r"^\w+\s*\(\s*\)\s*\{"],
                &[],
            ),
        ),
        (
            ".sql",
            LanguagePatterns::new(
                &["--"],
                C_BLOCK,
                &[],
                &[r"^(CREATE\s+)?(FUNCTION|PROCEDURE)\s+\w+"],
                &[],
            ),
        ),
    ])
});

static GENERIC: Lazy<LanguagePatterns> =
    Lazy::new(|| LanguagePatterns::new(&["#", "//", "--"], None, &[], &[], &[]));

/// Patterns for a lowercase, dot-prefixed extension, or the generic set.
pub(super) fn patterns_for(extension: &str) -> &'static LanguagePatterns {
    LANGUAGES.get(extension).unwrap_or(&*GENERIC)
}
