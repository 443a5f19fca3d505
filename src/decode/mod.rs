//! Shared utilities used by both analyzers: the size gate, charset detection
//! and lossy decoding, line statistics, truncation of presented content, and
//! filesystem metadata for the page.

mod encoding;
mod lines;
mod metadata;
mod size;
mod truncate;

pub use encoding::{decode, Decoded};
pub use lines::line_stats;
pub use metadata::{file_metadata, format_time};
pub use size::{check_size, human_size, read_source};
pub use truncate::{truncate, Truncated};
