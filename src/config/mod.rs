//! Defines the `Config` struct and related types for application configuration.
//!
//! A `Config` is built once per run, either from the CLI through
//! [`ConfigBuilder::from_cli`] or programmatically, and is read-only afterwards.

use crate::constants::PAGE_SUFFIX;
use crate::core_types::ProcessingOptions;
use crate::output::PageOptions;
use glob::Pattern;
use std::path::{Path, PathBuf};

pub use builder::ConfigBuilder;
mod builder;
mod parsing;
mod validation;

/// Settings for expanding inputs into files.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryConfig {
    /// Descend into subdirectories of directory inputs.
    pub recursive: bool,
    /// Files whose name or path matches any of these are skipped during expansion.
    pub exclude: Vec<Pattern>,
}

/// Where pages are written.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputPlacement {
    /// `<input name>.md` next to each input.
    #[default]
    BesideInput,
    /// A single explicit page path; used when exactly one file is processed.
    File(PathBuf),
    /// `<dir>/<input name>.md` for every input.
    Directory(PathBuf),
}

/// The complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Files and directories named by the user.
    pub inputs: Vec<PathBuf>,
    pub discovery: DiscoveryConfig,
    pub processing: ProcessingOptions,
    pub page: PageOptions,
    pub output: OutputPlacement,
    /// Check files without writing pages.
    pub validate_only: bool,
    /// Print the supported types instead of processing anything.
    pub list_formats: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Config {
    /// Where the page for `input` goes, given how many files the run processes.
    ///
    /// `-o` names a file only when a single file is processed; with several
    /// files it is treated as a directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use docpage::config::ConfigBuilder;
    /// use std::path::{Path, PathBuf};
    ///
    /// # fn main() -> docpage::errors::Result<()> {
    /// let config = ConfigBuilder::new().input("src/app.py").build()?;
    /// assert_eq!(
    ///     config.page_destination(Path::new("src/app.py"), 1),
    ///     PathBuf::from("src/app.py.md")
    /// );
    ///
    /// let config = ConfigBuilder::new().input("a.json").output("docs").build()?;
    /// assert_eq!(
    ///     config.page_destination(Path::new("data/a.json"), 2),
    ///     PathBuf::from("docs/a.json.md")
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn page_destination(&self, input: &Path, file_count: usize) -> PathBuf {
        match &self.output {
            OutputPlacement::File(path) if file_count == 1 => path.clone(),
            OutputPlacement::File(dir) | OutputPlacement::Directory(dir) => {
                dir.join(page_name(input))
            }
            OutputPlacement::BesideInput => input
                .parent()
                .map(|parent| parent.join(page_name(input)))
                .unwrap_or_else(|| PathBuf::from(page_name(input))),
        }
    }
}

fn page_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}{}", name, PAGE_SUFFIX)
}
