//! The `docpage` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types and functions so that
//! a single glob import is enough to process files and render pages.
//!
//! # Example
//!
//! ```
//! use docpage::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let registry = TypeRegistry::new();
//! let result = process_bytes(&registry, b"key: value\n", ".yaml", &ProcessingOptions::default());
//! assert_eq!(result.validity, Validity::Valid);
//!
//! let descriptor = registry.resolve(".yaml", None);
//! let page = render_page(Path::new("settings.yaml"), &descriptor, &result, &PageOptions::default())?;
//! assert!(page.contains("key: value"));
//! # Ok(())
//! # }
//! ```

pub use crate::config::{Config, ConfigBuilder, DiscoveryConfig, OutputPlacement};
pub use crate::core_types::{
    AnalysisResult, FileStats, LanguageStats, LineStats, ProcessingOptions, ProcessingPath,
    StructureStats, SubFormat, TypeDescriptor, Validity,
};
pub use crate::discovery::discover_files;
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::output::{render_page, write_page, PageOptions};
pub use crate::processing::{
    filters::{ContentFilter, EscapeFencesFilter},
    process_bytes, process_file, process_files, read_source,
};
pub use crate::registry::TypeRegistry;
pub use crate::{run, FileOutcome, RunSummary};
