// src/processing/structured/ini.rs

use super::StructuredOutput;
use crate::core_types::{IniStats, StructureStats, SubFormat};
use std::collections::BTreeSet;

const DEFAULT_SECTION: &str = "DEFAULT";
const COMMENT_PREFIXES: [char; 2] = ['#', ';'];

#[derive(Debug)]
struct Section {
    name: String,
    /// Option names, lowercased.
    options: BTreeSet<String>,
}

/// Checks INI-style content and counts its sections and options.
/// The original text is always kept.
pub(super) fn process(content: &str) -> StructuredOutput {
    match parse(content) {
        Ok((sections, defaults)) => {
            let total_options = sections
                .iter()
                .map(|section| section.options.union(&defaults).count())
                .sum();
            let names: Vec<String> = sections.into_iter().map(|s| s.name).collect();
            let stats = IniStats {
                section_count: names.len(),
                sections: names,
                total_options,
            };
            StructuredOutput::valid(content.to_string(), StructureStats::Ini(stats))
        }
        Err(message) => StructuredOutput::invalid(
            content,
            SubFormat::Ini,
            format!("Configuration parsing error: {}", message),
        ),
    }
}

/// Returns the named sections in file order plus the `DEFAULT` options.
///
/// Header, duplicate, and missing-header errors stop parsing at once. Lines
/// that are neither header, option, comment, nor continuation are collected
/// and reported together.
fn parse(content: &str) -> Result<(Vec<Section>, BTreeSet<String>), String> {
    let mut sections: Vec<Section> = Vec::new();
    let mut defaults: BTreeSet<String> = BTreeSet::new();
    // None: before any header. Some(None): in DEFAULT. Some(Some(i)): sections[i].
    let mut current: Option<Option<usize>> = None;
    let mut in_option = false;
    let mut option_indent = 0usize;
    let mut bad_lines: Vec<String> = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let line_no = index + 1;
        let value = line.trim();
        if value.is_empty() || value.starts_with(COMMENT_PREFIXES) {
            continue;
        }

        let indent = line.chars().take_while(|c| c.is_whitespace()).count();
        if current.is_some() && in_option && indent > option_indent {
            continue;
        }

        if let Some(header) = section_header(value) {
            if header == DEFAULT_SECTION {
                current = Some(None);
            } else if sections.iter().any(|s| s.name == header) {
                return Err(format!(
                    "section '{}' already exists (line {})",
                    header, line_no
                ));
            } else {
                sections.push(Section {
                    name: header.to_string(),
                    options: BTreeSet::new(),
                });
                current = Some(Some(sections.len() - 1));
            }
            in_option = false;
            continue;
        }

        let section = match current {
            Some(section) => section,
            None => {
                return Err(format!(
                    "File contains no section headers (line {}): '{}'",
                    line_no, line
                ))
            }
        };

        let name = match option_name(value) {
            Some(name) => name,
            None => {
                bad_lines.push(format!("[line {}]: '{}'", line_no, line));
                in_option = false;
                continue;
            }
        };

        let (options, section_name) = match section {
            Some(i) => {
                let section = &mut sections[i];
                (&mut section.options, section.name.as_str())
            }
            None => (&mut defaults, DEFAULT_SECTION),
        };
        if options.contains(&name) {
            return Err(format!(
                "option '{}' in section '{}' already exists (line {})",
                name, section_name, line_no
            ));
        }
        options.insert(name);
        in_option = true;
        option_indent = indent;
    }

    if !bad_lines.is_empty() {
        return Err(format!(
            "Source contains parsing errors: {}",
            bad_lines.join(", ")
        ));
    }
    Ok((sections, defaults))
}

/// `[name]` at the start of the line; the name runs to the last `]`.
fn section_header(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('[')?;
    let end = inner.rfind(']')?;
    let name = &inner[..end];
    (!name.is_empty()).then_some(name)
}

/// The lowercased option name before the first `=` or `:`.
fn option_name(value: &str) -> Option<String> {
    let split = value.find(['=', ':'])?;
    let name = value[..split].trim_end();
    (!name.is_empty()).then(|| name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Validity;

    fn ini_stats(output: &StructuredOutput) -> &IniStats {
        match &output.stats {
            StructureStats::Ini(stats) => stats,
            other => panic!("Expected INI stats, got {:?}", other),
        }
    }

    #[test]
    fn test_sections_and_options() {
        let source = "; comment\n[server]\nhost = localhost\nport: 8080\n\n# another\n[client]\nretries=3\n";
        let output = process(source);
        assert_eq!(output.validity, Validity::Valid);
        assert_eq!(output.content, source);
        let stats = ini_stats(&output);
        assert_eq!(stats.sections, vec!["server", "client"]);
        assert_eq!(stats.section_count, 2);
        assert_eq!(stats.total_options, 3);
    }

    #[test]
    fn test_defaults_are_inherited_but_not_listed() {
        let source = "[DEFAULT]\ntimeout = 5\nhost = x\n[a]\nhost = y\n[b]\nname = z\n";
        let stats_output = process(source);
        let stats = ini_stats(&stats_output);
        assert_eq!(stats.sections, vec!["a", "b"]);
        // a: {timeout, host}; b: {timeout, host, name}
        assert_eq!(stats.total_options, 5);
    }

    #[test]
    fn test_continuation_lines() {
        let source = "[paths]\nsearch =\n    /usr/lib\n\n    /opt/lib\nother = 1\n";
        let output = process(source);
        assert_eq!(output.validity, Validity::Valid);
        assert_eq!(ini_stats(&output).total_options, 2);
    }

    #[test]
    fn test_option_names_are_case_insensitive() {
        let output = process("[s]\nKey = 1\nkey = 2\n");
        assert_eq!(output.validity, Validity::Invalid);
        assert!(output
            .parse_error
            .unwrap_or_default()
            .contains("option 'key' in section 's' already exists"));
    }

    #[test]
    fn test_missing_section_header() {
        let output = process("key = value\n");
        assert_eq!(output.validity, Validity::Invalid);
        let error = output.parse_error.unwrap_or_default();
        assert!(error.starts_with("Configuration parsing error: "));
        assert!(error.contains("no section headers"));
    }

    #[test]
    fn test_duplicate_section() {
        let output = process("[a]\nx = 1\n[a]\ny = 2\n");
        assert!(output
            .parse_error
            .unwrap_or_default()
            .contains("section 'a' already exists (line 3)"));
    }

    #[test]
    fn test_unparseable_lines_are_collected() {
        let output = process("[a]\nnot an option\nx = 1\nalso bad\n");
        assert_eq!(output.validity, Validity::Invalid);
        let error = output.parse_error.unwrap_or_default();
        assert!(error.contains("[line 2]: 'not an option'"), "{}", error);
        assert!(error.contains("[line 4]: 'also bad'"), "{}", error);
        assert_eq!(output.content, "[a]\nnot an option\nx = 1\nalso bad\n");
    }

    #[test]
    fn test_header_helpers() {
        assert_eq!(section_header("[a b]"), Some("a b"));
        assert_eq!(section_header("[a] x]"), Some("a] x"));
        assert_eq!(section_header("[]"), None);
        assert_eq!(option_name("Path : /tmp"), Some("path".to_string()));
        assert_eq!(option_name("= orphan"), None);
    }
}
