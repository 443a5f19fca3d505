// src/config/validation.rs

use super::ConfigBuilder;
use crate::constants::MAX_INDENT;
use crate::errors::ConfigError;

/// Validates option values and combinations that clap cannot express.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<(), ConfigError> {
    if builder.output.is_some() && builder.output_dir.is_some() {
        return Err(ConfigError::Conflict {
            option1: "--output".to_string(),
            option2: "--output-dir".to_string(),
        });
    }
    if builder.indent.is_some_and(|indent| indent > MAX_INDENT) {
        return Err(ConfigError::InvalidValue {
            option: "--indent".to_string(),
            reason: format!("must be {} or less", MAX_INDENT),
        });
    }
    if builder.max_lines == Some(0) {
        return Err(ConfigError::InvalidValue {
            option: "--max-lines".to_string(),
            reason: "must be 1 or greater".to_string(),
        });
    }
    if !builder.list_formats.unwrap_or(false) && builder.inputs.is_empty() {
        return Err(ConfigError::InvalidValue {
            option: "INPUT".to_string(),
            reason: "at least one file or directory is required".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_conflict() {
        let builder = ConfigBuilder::new().input("a").output("x.md").output_dir("d");
        assert!(matches!(
            validate_builder_options(&builder),
            Err(ConfigError::Conflict { .. })
        ));
    }

    #[test]
    fn test_indent_limit() {
        let ok = ConfigBuilder::new().input("a").indent(MAX_INDENT);
        assert!(validate_builder_options(&ok).is_ok());
        let too_wide = ConfigBuilder::new().input("a").indent(MAX_INDENT + 1);
        assert!(validate_builder_options(&too_wide).is_err());
    }

    #[test]
    fn test_max_lines_must_be_positive() {
        let builder = ConfigBuilder::new().input("a").max_lines(0);
        let error = validate_builder_options(&builder).unwrap_err();
        assert!(error.to_string().contains("--max-lines"));
    }

    #[test]
    fn test_inputs_required_unless_listing() {
        assert!(validate_builder_options(&ConfigBuilder::new()).is_err());
        assert!(validate_builder_options(&ConfigBuilder::new().list_formats(true)).is_ok());
    }
}
