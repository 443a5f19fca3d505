// src/output/content_block.rs

use crate::core_types::AnalysisResult;

const MIN_FENCE_LEN: usize = 3;

/// Writes the "Content" section: the fenced block and, when applicable,
/// the truncation note.
pub(super) fn render(highlight: &str, result: &AnalysisResult, line_numbers: bool) -> String {
    let fence = "`".repeat(fence_len(&result.content));
    let mut block = String::from("## Content\n\n");
    block.push_str(&fence);
    block.push_str(highlight);
    if line_numbers {
        block.push_str(" linenums=\"1\"");
    }
    block.push('\n');
    if !result.content.is_empty() {
        block.push_str(&result.content);
        if !result.content.ends_with('\n') {
            block.push('\n');
        }
    }
    block.push_str(&fence);
    block.push('\n');

    if let Some(line) = result.truncated_at_line {
        block.push_str(&format!(
            "\n!!! note \"Truncated\"\n    Content truncated at line {} of {}.\n",
            line, result.line_stats.total_lines
        ));
    }
    block
}

/// One backtick longer than the longest run in `content`, and never shorter than three.
fn fence_len(content: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for c in content.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    (longest + 1).max(MIN_FENCE_LEN)
}
