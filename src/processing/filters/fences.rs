// src/processing/filters/fences.rs

const FENCE: &str = "```";
const ESCAPED_FENCE: &str = "``\\`";

/// Replaces every run of three backticks with two backticks and an escaped one.
///
/// Runs are matched left to right without overlap, so six backticks become
/// two escaped triples.
///
/// # Examples
///
/// ```
/// use docpage::processing::filters::escape_fences;
///
/// assert_eq!(escape_fences("see ```code```"), "see ``\\`code``\\`");
/// assert_eq!(escape_fences("a `tick` and ``two``"), "a `tick` and ``two``");
/// ```
pub fn escape_fences(content: &str) -> String {
    content.replace(FENCE, ESCAPED_FENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_fences_unchanged() {
        let input = "let s = `x`;\n// ``not a fence``";
        assert_eq!(escape_fences(input), input);
    }

    #[test]
    fn test_long_runs() {
        assert_eq!(escape_fences("````"), "``\\``");
        assert_eq!(escape_fences("``````"), "``\\```\\`");
    }

    #[test]
    fn test_no_line_can_close_a_fence() {
        let input = "```\n  ````\n`````\n``````\nx```y";
        let escaped = escape_fences(input);
        for line in escaped.lines() {
            let trimmed = line.trim();
            let closes = trimmed.len() >= 3 && trimmed.chars().all(|c| c == '`');
            assert!(!closes, "line still closes a fence: {:?}", line);
        }
    }
}
