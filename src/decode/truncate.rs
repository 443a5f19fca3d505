// src/decode/truncate.rs

/// Presented content after applying an optional line cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truncated {
    pub content: String,
    /// The cutoff line, present only when lines were dropped.
    pub truncated_at_line: Option<usize>,
}

impl Truncated {
    pub fn was_truncated(&self) -> bool {
        self.truncated_at_line.is_some()
    }
}

/// Keeps the first `max_lines` lines of `content`, joined by `\n`.
///
/// Content with no more than `max_lines` lines, or no cap at all, is returned
/// unchanged (including its trailing newline, if any).
///
/// # Examples
///
/// ```
/// use docpage::decode::truncate;
///
/// let cut = truncate("a\nb\nc\n".to_string(), Some(2));
/// assert_eq!(cut.content, "a\nb");
/// assert_eq!(cut.truncated_at_line, Some(2));
///
/// let kept = truncate("a\nb\n".to_string(), Some(2));
/// assert_eq!(kept.content, "a\nb\n");
/// assert!(!kept.was_truncated());
/// ```
pub fn truncate(content: String, max_lines: Option<usize>) -> Truncated {
    let max = match max_lines {
        Some(max) if content.lines().nth(max).is_some() => max,
        _ => {
            return Truncated {
                content,
                truncated_at_line: None,
            }
        }
    };

    let kept: Vec<&str> = content.lines().take(max).collect();
    Truncated {
        content: kept.join("\n"),
        truncated_at_line: Some(max),
    }
}
