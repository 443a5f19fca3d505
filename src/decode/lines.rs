// src/decode/lines.rs

use crate::core_types::LineStats;

/// Counts total, blank, and non-blank lines.
///
/// Lines are split the way `str::lines` splits them: a trailing newline does
/// not start an extra line, and `\r\n` counts as one terminator. A line is
/// blank when nothing but whitespace remains after trimming.
///
/// # Examples
///
/// ```
/// use docpage::decode::line_stats;
///
/// let stats = line_stats("fn main() {}\n\n   \n// done\n");
/// assert_eq!(stats.total_lines, 4);
/// assert_eq!(stats.blank_lines, 2);
/// assert_eq!(stats.non_blank_lines, 2);
/// ```
#[inline]
pub fn line_stats(content: &str) -> LineStats {
    let (total_lines, blank_lines) = content.lines().fold((0, 0), |(total, blank), line| {
        (total + 1, blank + usize::from(line.trim().is_empty()))
    });
    LineStats {
        total_lines,
        blank_lines,
        non_blank_lines: total_lines - blank_lines,
    }
}
