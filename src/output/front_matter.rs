// src/output/front_matter.rs

use crate::core_types::TypeDescriptor;
use anyhow::{Context, Result};
use serde_yaml_ng::{Mapping, Value};
use std::path::Path;

/// Serializes the YAML front matter block, fences included.
///
/// `title`, `description` and `tags` come first; caller-supplied keys follow
/// and replace any of those three in place.
pub(super) fn render(
    title: &str,
    description: &str,
    tags: &[String],
    extra: &serde_json::Map<String, serde_json::Value>,
) -> Result<String> {
    let mut mapping = Mapping::new();
    mapping.insert("title".into(), title.into());
    mapping.insert("description".into(), description.into());
    if !tags.is_empty() {
        let tags: Vec<Value> = tags.iter().map(|t| Value::from(t.as_str())).collect();
        mapping.insert("tags".into(), Value::Sequence(tags));
    }
    for (key, value) in extra {
        let value = serde_yaml_ng::to_value(value)
            .with_context(|| format!("Failed to convert front matter key '{}'", key))?;
        mapping.insert(key.as_str().into(), value);
    }
    let yaml =
        serde_yaml_ng::to_string(&mapping).context("Failed to serialize page front matter")?;
    Ok(format!("---\n{}---\n", yaml))
}

/// File stem with `_` and `-` turned into spaces, title-cased, then the type name.
pub(super) fn default_title(path: &Path, descriptor: &TypeDescriptor) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_default();
    format!("{} ({})", title_case(&stem), descriptor.name)
}

pub(super) fn default_description(path: &Path, descriptor: &TypeDescriptor) -> String {
    let summary = descriptor.description.as_deref().unwrap_or(&descriptor.name);
    format!("{} - {}", summary, file_name(path))
}

/// Lowercase type name, bare extension, processing path; first occurrence wins.
pub(super) fn default_tags(path: &Path, descriptor: &TypeDescriptor) -> Vec<String> {
    let mut tags = vec![descriptor.name.to_lowercase()];
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());
    for tag in extension
        .into_iter()
        .chain(std::iter::once(descriptor.path.as_str().to_string()))
    {
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

pub(super) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Uppercases the first letter of every run of letters and lowercases the rest.
fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::ProcessingPath;

    fn python() -> TypeDescriptor {
        TypeDescriptor::new("Python", "🐍", "python", ProcessingPath::Code)
            .with_description("Python source code")
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("data loader"), "Data Loader");
        assert_eq!(title_case("HTTP client"), "Http Client");
        assert_eq!(title_case("v2beta config"), "V2Beta Config");
    }

    #[test]
    fn test_defaults() {
        let path = Path::new("src/data_loader-v2.py");
        assert_eq!(default_title(path, &python()), "Data Loader V2 (Python)");
        assert_eq!(
            default_description(path, &python()),
            "Python source code - data_loader-v2.py"
        );
        assert_eq!(default_tags(path, &python()), vec!["python", "py", "code"]);
    }

    #[test]
    fn test_default_tags_are_deduplicated() {
        let json = TypeDescriptor::new("JSON", "📋", "json", ProcessingPath::Structured);
        assert_eq!(
            default_tags(Path::new("a.JSON"), &json),
            vec!["json", "structured"]
        );
        assert_eq!(
            default_tags(Path::new("Makefile"), &json),
            vec!["json", "structured"]
        );
    }

    #[test]
    fn test_description_falls_back_to_name() {
        let bare = TypeDescriptor::new("Thing", "📄", "text", ProcessingPath::Code);
        assert_eq!(default_description(Path::new("x.thing"), &bare), "Thing - x.thing");
    }

    #[test]
    fn test_render_orders_keys_and_applies_extras() -> Result<()> {
        let mut extra = serde_json::Map::new();
        extra.insert("hide".to_string(), serde_json::json!(["toc"]));
        extra.insert("title".to_string(), serde_json::json!("Override"));
        let block = render("Original", "Desc", &["a".to_string()], &extra)?;

        assert!(block.starts_with("---\n"));
        assert!(block.ends_with("\n---\n"));
        let body = block.trim_start_matches("---\n").trim_end_matches("---\n");
        let parsed: Mapping = serde_yaml_ng::from_str(body)?;
        let keys: Vec<&str> = parsed.keys().filter_map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["title", "description", "tags", "hide"]);
        assert_eq!(parsed.get("title").and_then(Value::as_str), Some("Override"));
        Ok(())
    }

    #[test]
    fn test_render_omits_empty_tags() -> Result<()> {
        let block = render("T", "D", &[], &serde_json::Map::new())?;
        assert!(!block.contains("tags"));
        Ok(())
    }
}
