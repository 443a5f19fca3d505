// src/config/parsing.rs

use crate::errors::ConfigError;
use byte_unit::Byte;
use glob::Pattern;
use std::str::FromStr;

fn invalid(option: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        option: option.to_string(),
        reason: reason.into(),
    }
}

/// Parses a human-readable size such as "10MiB" or "512k" into bytes.
pub(super) fn parse_max_file_size(size: &str) -> Result<u64, ConfigError> {
    Byte::from_str(size)
        .map(|b| b.as_u64())
        .map_err(|e| invalid("--max-file-size", format!("'{}': {}", size, e)))
}

/// Splits a comma-separated list, trimming items and dropping empty ones.
pub(super) fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(String::from)
        .collect()
}

/// Compiles exclusion globs.
pub(super) fn compile_globs(patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(|e| invalid("--exclude", format!("'{}': {}", p, e))))
        .collect()
}

/// Parses extra front matter, which must be a JSON object.
pub(super) fn parse_front_matter(
    json: &str,
) -> Result<serde_json::Map<String, serde_json::Value>, ConfigError> {
    match serde_json::from_str(json) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(_) => Err(invalid("--frontmatter", "must be a JSON object")),
        Err(e) => Err(invalid("--frontmatter", format!("invalid JSON: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_max_file_size() -> Result<(), ConfigError> {
        assert_eq!(parse_max_file_size("10k")?, 10 * 1000);
        assert_eq!(parse_max_file_size("2MiB")?, 2 * 1024 * 1024);
        assert_eq!(parse_max_file_size("1024")?, 1024);
        Ok(())
    }

    #[test]
    fn test_parse_invalid_max_file_size() {
        let result = parse_max_file_size("lots");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref option, .. }) if option == "--max-file-size"
        ));
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" a, b ,,c "), vec!["a", "b", "c"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_compile_globs() -> Result<(), ConfigError> {
        let globs = compile_globs(&["*.md".to_string(), "build/*".to_string()])?;
        assert!(globs[0].matches("README.md"));
        assert!(compile_globs(&["[".to_string()]).is_err());
        Ok(())
    }

    #[test]
    fn test_parse_front_matter() -> Result<(), ConfigError> {
        let map = parse_front_matter(r#"{"hide": ["toc"], "weight": 3}"#)?;
        assert_eq!(map.len(), 2);
        assert_eq!(
            parse_front_matter("[1, 2]"),
            Err(invalid("--frontmatter", "must be a JSON object"))
        );
        assert!(parse_front_matter("{").is_err());
        Ok(())
    }
}
