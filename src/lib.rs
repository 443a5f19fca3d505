//! `docpage` is a library and command-line tool that turns source code and
//! structured data files into Markdown documentation pages.
//!
//! Every file is resolved to a type through the [`registry::TypeRegistry`] and
//! then follows one of two processing paths:
//! 1.  **Code**: the text is decoded, made safe for a fenced block, and
//!     analyzed line by line for comments, imports, functions, classes and
//!     docstrings.
//! 2.  **Structured**: JSON, XML and YAML are validated and pretty-printed;
//!     TOML and INI are validated; anything else gets a coarse pattern scan.
//!     Grammar errors are reported as data, never as `Err`.
//!
//! The result of either path is an [`AnalysisResult`], which
//! [`output::render_page`] turns into a page with YAML front matter suitable
//! for static site generators such as MkDocs.
//!
//! # Example: Library Usage
//!
//! ```
//! use docpage::core_types::{ProcessingOptions, Validity};
//! use docpage::output::{render_page, PageOptions};
//! use docpage::processing::process_file;
//! use docpage::registry::TypeRegistry;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! # fn main() -> anyhow::Result<()> {
//! // 1. A file to document.
//! let dir = tempdir()?;
//! let path = dir.path().join("pipeline.slp");
//! fs::write(&path, r#"{"pipeline": "test"}"#)?;
//!
//! // 2. Analyze it as JSON despite its extension.
//! let registry = TypeRegistry::new();
//! let options = ProcessingOptions {
//!     format_override: Some("json".to_string()),
//!     ..ProcessingOptions::default()
//! };
//! let result = process_file(&registry, &path, &options);
//! assert_eq!(result.validity, Validity::Valid);
//!
//! // 3. Render the page.
//! let descriptor = registry.resolve(".slp", options.format_override.as_deref());
//! let page = render_page(&path, &descriptor, &result, &PageOptions::default())?;
//! assert!(page.contains("\"pipeline\": \"test\""));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod decode;
pub mod discovery;
pub mod errors;
pub mod output;
pub mod prelude;
pub mod processing;
pub mod registry;

// Re-export key public types for easier use as a library
pub use config::{Config, ConfigBuilder};
pub use core_types::{AnalysisResult, ProcessingOptions, ProcessingPath, TypeDescriptor};
pub use processing::{process_bytes, process_file, process_files};
pub use registry::TypeRegistry;

use crate::core_types::Validity;
use crate::errors::Result;
use log::{debug, error, info, warn};
use std::path::PathBuf;

/// What happened to one file during [`run`].
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    /// Where the page was written; `None` for failures and validate-only runs.
    pub page: Option<PathBuf>,
    pub result: AnalysisResult,
    /// Set when the file counts as failed, including page rendering or writing problems.
    pub failure: Option<String>,
}

/// Totals for a [`run`].
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
    pub succeeded: usize,
    pub failed: usize,
    /// Structured files whose grammar check failed.
    pub invalid: usize,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Executes the complete pipeline: discover, process, then render and write pages.
///
/// Files are analyzed in parallel; pages are written in discovery order.
/// Per-file problems are counted in the summary rather than aborting the run.
/// With `validate_only`, nothing is written and invalid structured files count
/// as failures.
///
/// # Errors
/// Returns `Error::Io` for a missing input and `Error::NoFilesFound` when
/// discovery leaves nothing to process.
pub fn run(config: &Config) -> Result<RunSummary> {
    let files = discovery::discover_files(&config.inputs, &config.discovery)?;
    info!("Found {} file(s) to process", files.len());

    let registry = TypeRegistry::new();
    let results = process_files(&registry, &files, &config.processing);
    let file_count = results.len();

    let mut summary = RunSummary::default();
    for (path, result) in results {
        let outcome = finish_file(config, &registry, path, result, file_count);
        if outcome.result.validity == Validity::Invalid && outcome.result.error.is_none() {
            summary.invalid += 1;
        }
        match &outcome.failure {
            Some(reason) => {
                error!("Error processing {}: {}", outcome.path.display(), reason);
                summary.failed += 1;
            }
            None => summary.succeeded += 1,
        }
        summary.outcomes.push(outcome);
    }

    if config.validate_only {
        info!(
            "Validation complete: {} valid, {} errors",
            summary.succeeded, summary.failed
        );
    } else {
        info!(
            "Processing complete: {} generated, {} errors",
            summary.succeeded, summary.failed
        );
    }
    Ok(summary)
}

fn finish_file(
    config: &Config,
    registry: &TypeRegistry,
    path: PathBuf,
    result: AnalysisResult,
    file_count: usize,
) -> FileOutcome {
    let mut outcome = FileOutcome {
        path,
        page: None,
        failure: result.error.clone(),
        result,
    };
    if outcome.failure.is_some() {
        return outcome;
    }

    if config.validate_only {
        match (&outcome.result.validity, &outcome.result.parse_error) {
            (Validity::Invalid, Some(parse_error)) => {
                outcome.failure = Some(parse_error.clone());
            }
            (Validity::Invalid, None) => outcome.failure = Some("invalid content".to_string()),
            (validity, _) => debug!("Valid ({:?}): {}", validity, outcome.path.display()),
        }
        return outcome;
    }

    if let Some(parse_error) = &outcome.result.parse_error {
        warn!("{}: {}", outcome.path.display(), parse_error);
    }
    let extension = processing::extension_of(&outcome.path);
    let descriptor = registry.resolve(&extension, config.processing.format_override.as_deref());
    let destination = config.page_destination(&outcome.path, file_count);
    let written = output::render_page(&outcome.path, &descriptor, &outcome.result, &config.page)
        .and_then(|page| Ok(output::write_page(&destination, &page)?));
    match written {
        Ok(()) => {
            info!("Generated: {}", destination.display());
            outcome.page = Some(destination);
        }
        Err(e) => outcome.failure = Some(format!("{:#}", e)),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_pages_beside_inputs() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("config.yaml"), "a: 1\n")?;
        fs::write(temp.path().join("main.py"), "print(1)\n")?;

        let config = ConfigBuilder::new()
            .input(temp.path().to_string_lossy())
            .build()?;
        let summary = run(&config)?;

        assert_eq!(summary.succeeded, 2);
        assert!(!summary.has_failures());
        assert!(temp.path().join("config.yaml.md").is_file());
        let page = fs::read_to_string(temp.path().join("main.py.md"))?;
        assert!(page.contains("print(1)"));
        Ok(())
    }

    #[test]
    fn test_run_counts_oversized_files_as_failures() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let big = temp.path().join("big.json");
        fs::write(&big, "[1, 2, 3, 4, 5, 6, 7, 8, 9]")?;

        let config = ConfigBuilder::new()
            .input(big.to_string_lossy())
            .max_file_size("8")
            .build()?;
        let summary = run(&config)?;

        assert_eq!(summary.failed, 1);
        assert!(summary.outcomes[0].page.is_none());
        assert!(!temp.path().join("big.json.md").exists());
        Ok(())
    }

    #[test]
    fn test_invalid_files_still_get_pages() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let broken = temp.path().join("broken.xml");
        fs::write(&broken, "<a><b></a>")?;

        let config = ConfigBuilder::new().input(broken.to_string_lossy()).build()?;
        let summary = run(&config)?;

        assert_eq!(summary.failed, 0);
        assert_eq!(summary.invalid, 1);
        assert!(temp.path().join("broken.xml.md").is_file());
        Ok(())
    }

    #[test]
    fn test_validate_only_writes_nothing() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let good = temp.path().join("good.json");
        let bad = temp.path().join("bad.json");
        fs::write(&good, "{}")?;
        fs::write(&bad, "{")?;

        let config = ConfigBuilder::new()
            .input(good.to_string_lossy())
            .input(bad.to_string_lossy())
            .validate_only(true)
            .build()?;
        let summary = run(&config)?;

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 1);
        assert!(!temp.path().join("good.json.md").exists());
        assert!(!temp.path().join("bad.json.md").exists());
        Ok(())
    }

    #[test]
    fn test_run_with_nothing_to_do() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("README.md"), "# hi")?;
        let config = ConfigBuilder::new()
            .input(temp.path().to_string_lossy())
            .build()?;
        assert!(matches!(run(&config), Err(Error::NoFilesFound)));
        Ok(())
    }
}
