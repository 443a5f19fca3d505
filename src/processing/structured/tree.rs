// src/processing/structured/tree.rs

use crate::constants::{
    ITEM_TYPE_SAMPLE, MAX_ANALYSIS_DEPTH, SCALAR_PREVIEW_CHARS, TOP_LEVEL_KEY_SAMPLE,
};
use crate::core_types::{SubFormat, TreeShape, TreeStats};

/// A borrowed, format-neutral view of one node of a parsed document.
pub(super) enum View<'a, V> {
    Mapping(Vec<(String, &'a V)>),
    Sequence(&'a [V]),
    Scalar {
        type_label: &'static str,
        /// Display text; `None` for null.
        text: Option<String>,
    },
}

/// Implemented by the value types of the YAML and TOML parsers so that one
/// depth analyzer serves both.
pub(super) trait TreeValue: Sized {
    fn view(&self) -> View<'_, Self>;

    fn type_label(&self) -> &'static str {
        match self.view() {
            View::Mapping(_) => "object",
            View::Sequence(_) => "array",
            View::Scalar { type_label, .. } => type_label,
        }
    }
}

/// Summarizes the top-level shape and maximum nesting depth of a document.
pub(super) fn analyze<V: TreeValue>(value: &V, format: SubFormat) -> TreeStats {
    let mut depth_limited = false;
    let shape = match value.view() {
        View::Mapping(entries) => TreeShape::Object {
            keys: entries.len(),
            max_depth: max_depth(value, 0, &mut depth_limited),
            top_level_keys: entries
                .iter()
                .take(TOP_LEVEL_KEY_SAMPLE)
                .map(|(key, _)| key.clone())
                .collect(),
        },
        View::Sequence(items) => TreeShape::Array {
            length: items.len(),
            max_depth: max_depth(value, 0, &mut depth_limited),
            item_types: items
                .iter()
                .take(ITEM_TYPE_SAMPLE)
                .map(|item| item.type_label().to_string())
                .collect(),
        },
        View::Scalar { type_label, text } => TreeShape::Scalar {
            value_type: type_label.to_string(),
            value: text.map(|t| t.chars().take(SCALAR_PREVIEW_CHARS).collect()),
        },
    };
    TreeStats {
        format,
        shape,
        depth_limited,
    }
}

/// Deepest nesting below `value`, counting one level per descent into a child.
///
/// Empty containers and scalars add nothing. Descent stops at
/// [`MAX_ANALYSIS_DEPTH`], setting `limited`.
fn max_depth<V: TreeValue>(value: &V, current: usize, limited: &mut bool) -> usize {
    let children: Vec<&V> = match value.view() {
        View::Mapping(entries) => entries.into_iter().map(|(_, child)| child).collect(),
        View::Sequence(items) => items.iter().collect(),
        View::Scalar { .. } => return current,
    };
    if children.is_empty() {
        return current;
    }
    if current >= MAX_ANALYSIS_DEPTH {
        *limited = true;
        return current;
    }
    children
        .into_iter()
        .map(|child| max_depth(child, current + 1, limited))
        .max()
        .unwrap_or(current)
}
