// src/config/builder.rs

use super::{
    parsing::{compile_globs, parse_front_matter, parse_max_file_size, split_list},
    validation::validate_builder_options,
    Config, DiscoveryConfig, OutputPlacement,
};
use crate::cli::Cli;
use crate::constants::{DEFAULT_EXCLUDE, DEFAULT_INDENT, DEFAULT_MAX_FILE_SIZE};
use crate::core_types::ProcessingOptions;
use crate::errors::Result;
use crate::output::PageOptions;
use std::path::PathBuf;

/// Builds a [`Config`] step by step.
///
/// Every setter is optional; unset options take the same defaults as the CLI.
/// Values are checked in [`ConfigBuilder::build`].
///
/// # Examples
///
/// ```
/// use docpage::config::ConfigBuilder;
///
/// # fn main() -> docpage::errors::Result<()> {
/// let config = ConfigBuilder::new()
///     .input("pipeline.slp")
///     .format_override("json")
///     .max_file_size("1MiB")
///     .tags(vec!["etl".to_string()])
///     .build()?;
///
/// assert_eq!(config.processing.format_override.as_deref(), Some("json"));
/// assert_eq!(config.processing.max_file_size, 1024 * 1024);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(super) inputs: Vec<String>,
    pub(super) output: Option<String>,
    pub(super) output_dir: Option<String>,
    pub(super) recursive: Option<bool>,
    pub(super) exclude: Option<Vec<String>>,
    pub(super) format_override: Option<String>,
    pub(super) max_lines: Option<usize>,
    pub(super) max_file_size: Option<String>,
    pub(super) encoding: Option<String>,
    pub(super) indent: Option<usize>,
    pub(super) title: Option<String>,
    pub(super) description: Option<String>,
    pub(super) tags: Option<Vec<String>>,
    pub(super) include_metadata: Option<bool>,
    pub(super) include_stats: Option<bool>,
    pub(super) line_numbers: Option<bool>,
    pub(super) include_timestamp: Option<bool>,
    pub(super) front_matter: Option<String>,
    pub(super) list_formats: Option<bool>,
    pub(super) validate_only: Option<bool>,
    pub(super) quiet: Option<bool>,
    pub(super) verbose: Option<bool>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            inputs: cli.inputs,
            output: cli.output,
            output_dir: cli.output_dir,
            recursive: Some(cli.recursive),
            exclude: Some(split_list(&cli.exclude)),
            format_override: cli.format_override,
            max_lines: cli.max_lines,
            max_file_size: cli.max_file_size,
            encoding: cli.encoding,
            indent: Some(cli.indent),
            title: cli.title,
            description: cli.description,
            tags: cli.tags.as_deref().map(split_list),
            include_metadata: Some(!cli.no_metadata),
            include_stats: Some(!cli.no_stats),
            line_numbers: Some(!cli.no_line_numbers),
            include_timestamp: Some(!cli.no_timestamp),
            front_matter: cli.frontmatter,
            list_formats: Some(cli.list_formats),
            validate_only: Some(cli.validate_only),
            quiet: Some(cli.quiet),
            verbose: Some(cli.verbose),
        }
    }

    /// Adds a file or directory to process.
    pub fn input(mut self, path: impl Into<String>) -> Self {
        self.inputs.push(path.into());
        self
    }

    pub fn inputs(mut self, paths: Vec<String>) -> Self {
        self.inputs = paths;
        self
    }

    /// Page path for a single file, or a directory when several files are processed.
    pub fn output(mut self, path: impl Into<String>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn output_dir(mut self, path: impl Into<String>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }

    /// Glob patterns skipped during directory expansion. Replaces the default `*.md`.
    pub fn exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = Some(patterns);
        self
    }

    pub fn format_override(mut self, format: impl Into<String>) -> Self {
        self.format_override = Some(format.into());
        self
    }

    pub fn max_lines(mut self, lines: usize) -> Self {
        self.max_lines = Some(lines);
        self
    }

    /// Human-readable size such as "10MiB"; parsed in `build`.
    pub fn max_file_size(mut self, size: impl Into<String>) -> Self {
        self.max_file_size = Some(size.into());
        self
    }

    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = Some(tags);
        self
    }

    pub fn include_metadata(mut self, include: bool) -> Self {
        self.include_metadata = Some(include);
        self
    }

    pub fn include_stats(mut self, include: bool) -> Self {
        self.include_stats = Some(include);
        self
    }

    pub fn line_numbers(mut self, line_numbers: bool) -> Self {
        self.line_numbers = Some(line_numbers);
        self
    }

    pub fn include_timestamp(mut self, include_timestamp: bool) -> Self {
        self.include_timestamp = Some(include_timestamp);
        self
    }

    /// Extra front matter as a JSON object string; parsed in `build`.
    pub fn front_matter(mut self, json: impl Into<String>) -> Self {
        self.front_matter = Some(json.into());
        self
    }

    pub fn list_formats(mut self, list: bool) -> Self {
        self.list_formats = Some(list);
        self
    }

    pub fn validate_only(mut self, validate_only: bool) -> Self {
        self.validate_only = Some(validate_only);
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Validates the options and produces the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::Config` for out-of-range values, unparseable sizes,
    /// globs or front matter, and conflicting output options.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        let max_file_size = match self.max_file_size.as_deref() {
            Some(size) => parse_max_file_size(size)?,
            None => DEFAULT_MAX_FILE_SIZE,
        };
        let exclude = self
            .exclude
            .unwrap_or_else(|| vec![DEFAULT_EXCLUDE.to_string()]);
        let front_matter = match self.front_matter.as_deref() {
            Some(json) => parse_front_matter(json)?,
            None => serde_json::Map::new(),
        };
        let output = match (self.output, self.output_dir) {
            (_, Some(dir)) => OutputPlacement::Directory(PathBuf::from(dir)),
            (Some(path), None) => OutputPlacement::File(PathBuf::from(path)),
            (None, None) => OutputPlacement::BesideInput,
        };

        Ok(Config {
            inputs: self.inputs.into_iter().map(PathBuf::from).collect(),
            discovery: DiscoveryConfig {
                recursive: self.recursive.unwrap_or(false),
                exclude: compile_globs(&exclude)?,
            },
            processing: ProcessingOptions {
                max_lines: self.max_lines,
                encoding: self.encoding,
                indent: self.indent.unwrap_or(DEFAULT_INDENT),
                format_override: self.format_override,
                max_file_size,
            },
            page: PageOptions {
                title: self.title,
                description: self.description,
                tags: self.tags,
                include_metadata: self.include_metadata.unwrap_or(true),
                include_stats: self.include_stats.unwrap_or(true),
                line_numbers: self.line_numbers.unwrap_or(true),
                include_timestamp: self.include_timestamp.unwrap_or(true),
                front_matter,
            },
            output,
            validate_only: self.validate_only.unwrap_or(false),
            list_formats: self.list_formats.unwrap_or(false),
            quiet: self.quiet.unwrap_or(false),
            verbose: self.verbose.unwrap_or(false),
        })
    }
}
