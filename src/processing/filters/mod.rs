//! Provides a trait and implementations for transforming presented content.

use std::fmt;

mod fences;

pub use fences::escape_fences;

/// A trait for content transformation filters.
///
/// Filters are applied in order to decoded code-path content, before
/// truncation.
pub trait ContentFilter: Send + Sync {
    /// Applies the filter to the given content string.
    fn apply(&self, content: &str) -> String;
    /// Returns a descriptive name for the filter.
    fn name(&self) -> &'static str;
}

impl fmt::Debug for Box<dyn ContentFilter> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentFilter").field(&self.name()).finish()
    }
}

/// Breaks up triple backticks so content cannot close its enclosing fence.
#[derive(Debug)]
pub struct EscapeFencesFilter;

impl ContentFilter for EscapeFencesFilter {
    fn apply(&self, content: &str) -> String {
        escape_fences(content)
    }
    fn name(&self) -> &'static str {
        "EscapeFencesFilter"
    }
}

/// The filters run over every file on the code path.
pub fn code_path_filters() -> Vec<Box<dyn ContentFilter>> {
    vec![Box::new(EscapeFencesFilter)]
}
