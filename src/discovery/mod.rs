//! Expands the user's inputs into the list of files to process.
use crate::config::DiscoveryConfig;
use crate::errors::{io_error_with_path, Error, Result};
use log::debug;
use std::fs;
use std::path::PathBuf;

mod walker;

use walker::{is_excluded, walk_directory};

/// Expands files and directories into the files to process.
///
/// Exclusion patterns only take part once a directory is involved: a run
/// that names nothing but files processes exactly those files. When any
/// input is a directory (or recursion is requested), file inputs are checked
/// against the patterns too, and directories contribute their files in
/// name order.
///
/// # Errors
/// Returns `Error::Io` if an input does not exist, and `Error::NoFilesFound`
/// if nothing is left to process.
///
/// # Examples
///
/// ```
/// use docpage::config::ConfigBuilder;
/// use docpage::discovery::discover_files;
/// use std::fs;
/// use tempfile::tempdir;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dir = tempdir()?;
/// fs::write(dir.path().join("data.json"), "{}")?;
/// fs::write(dir.path().join("data.json.md"), "# page")?;
///
/// let config = ConfigBuilder::new().input(dir.path().to_string_lossy()).build()?;
/// let files = discover_files(&config.inputs, &config.discovery)?;
/// assert_eq!(files, vec![dir.path().join("data.json")]);
/// # Ok(())
/// # }
/// ```
pub fn discover_files(inputs: &[PathBuf], config: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let mut is_dir = Vec::with_capacity(inputs.len());
    for input in inputs {
        let metadata = fs::metadata(input).map_err(|e| io_error_with_path(e, input))?;
        is_dir.push(metadata.is_dir());
    }
    let expand = config.recursive || is_dir.iter().any(|d| *d);
    debug!(
        "Discovering files from {} input(s) (expand: {}, recursive: {})",
        inputs.len(),
        expand,
        config.recursive
    );

    let mut files = Vec::new();
    for (input, is_dir) in inputs.iter().zip(is_dir) {
        if is_dir {
            files.extend(walk_directory(input, config.recursive, &config.exclude));
        } else if !expand || !is_excluded(input, &config.exclude) {
            files.push(input.clone());
        }
    }

    if files.is_empty() {
        return Err(Error::NoFilesFound);
    }
    debug!("Discovered {} file(s)", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glob::Pattern;
    use tempfile::tempdir;

    fn config(recursive: bool, exclude: &[&str]) -> DiscoveryConfig {
        DiscoveryConfig {
            recursive,
            exclude: exclude.iter().filter_map(|g| Pattern::new(g).ok()).collect(),
        }
    }

    #[test]
    fn test_plain_files_bypass_exclusion() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let readme = temp.path().join("README.md");
        fs::write(&readme, "# hi")?;
        let files = discover_files(&[readme.clone()], &config(false, &["*.md"]))?;
        assert_eq!(files, vec![readme]);
        Ok(())
    }

    #[test]
    fn test_files_excluded_when_directory_present() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let sub = temp.path().join("sub");
        fs::create_dir(&sub)?;
        fs::write(sub.join("a.toml"), "")?;
        let readme = temp.path().join("README.md");
        fs::write(&readme, "")?;

        let files = discover_files(&[readme, sub.clone()], &config(false, &["*.md"]))?;
        assert_eq!(files, vec![sub.join("a.toml")]);
        Ok(())
    }

    #[test]
    fn test_input_order_is_kept() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let z = temp.path().join("z.py");
        let a = temp.path().join("a.py");
        fs::write(&z, "")?;
        fs::write(&a, "")?;
        let files = discover_files(&[z.clone(), a.clone()], &config(false, &[]))?;
        assert_eq!(files, vec![z, a]);
        Ok(())
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let result = discover_files(&[PathBuf::from("no/such/input.json")], &config(false, &[]));
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_nothing_left_is_no_files_found() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("only.md"), "")?;
        let result = discover_files(&[temp.path().to_path_buf()], &config(true, &["*.md"]));
        assert!(matches!(result, Err(Error::NoFilesFound)));
        Ok(())
    }
}
