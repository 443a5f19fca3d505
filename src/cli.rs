// src/cli.rs

use clap::Parser;

/// Turns source code and structured data files into Markdown documentation pages.
///
/// Each input file becomes one page with YAML front matter, file information,
/// language or structure statistics, and the content in a fenced code block.
/// JSON, XML and YAML content is validated and pretty-printed; TOML and INI
/// content is validated. Pages are written next to their inputs as
/// `<file name>.md` unless an output location is given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Files or directories to process.
    #[arg(value_name = "INPUT", required_unless_present = "list_formats")]
    pub inputs: Vec<String>,

    // --- Output Placement ---
    /// Output file (single input) or directory (several inputs).
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<String>,

    /// Write every page into this directory.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,

    // --- Discovery ---
    /// Descend into subdirectories of directory inputs.
    #[arg(short = 'r', long, action = clap::ArgAction::SetTrue)]
    pub recursive: bool,

    /// Comma-separated glob patterns to exclude when expanding directories.
    #[arg(long, value_name = "GLOBS", default_value = crate::constants::DEFAULT_EXCLUDE)]
    pub exclude: String,

    // --- Processing ---
    /// Treat every input as this type (e.g. "json" for a `.slp` file).
    #[arg(long = "format", value_name = "TYPE")]
    pub format_override: Option<String>,

    /// Keep at most this many lines of content.
    #[arg(long, value_name = "LINES")]
    pub max_lines: Option<usize>,

    /// Skip files larger than this (e.g. "10MiB", "512k").
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<String>,

    /// Decode inputs with this encoding instead of detecting one.
    #[arg(long, value_name = "LABEL")]
    pub encoding: Option<String>,

    /// Indentation width for pretty-printed JSON, XML and YAML.
    #[arg(long, value_name = "SPACES", default_value_t = crate::constants::DEFAULT_INDENT)]
    pub indent: usize,

    // --- Page Content ---
    /// Page title (default: derived from the file name and type).
    #[arg(long)]
    pub title: Option<String>,

    /// Page description (default: type description and file name).
    #[arg(long)]
    pub description: Option<String>,

    /// Comma-separated page tags (default: type, extension, processing path).
    #[arg(long, value_name = "TAGS")]
    pub tags: Option<String>,

    /// Leave out the file information table.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_metadata: bool,

    /// Leave out the statistics section.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_stats: bool,

    /// Do not request line numbers on the content block.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_line_numbers: bool,

    /// Leave out the generation timestamp at the end of each page.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_timestamp: bool,

    /// Extra front matter as a JSON object, e.g. '{"hide": ["toc"]}'.
    #[arg(long, value_name = "JSON")]
    pub frontmatter: Option<String>,

    // --- Execution Control ---
    /// Print the supported file types and exit.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub list_formats: bool,

    /// Check files without writing pages; invalid structured files count as failures.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub validate_only: bool,

    /// Only report errors.
    #[arg(short = 'q', long, action = clap::ArgAction::SetTrue, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Report every file and enable debug logging.
    #[arg(short = 'v', long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}
