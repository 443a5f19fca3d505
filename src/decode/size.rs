// src/decode/size.rs

use crate::errors::{io_error_with_path, Error, Result};
use byte_unit::{Byte, UnitType};
use log::debug;
use std::{fs, path::Path};

/// Formats a byte count in binary units with one decimal, e.g. `12.0 MiB`.
///
/// # Examples
///
/// ```
/// use docpage::decode::human_size;
///
/// assert_eq!(human_size(2 * 1024 * 1024), "2.0 MiB");
/// assert_eq!(human_size(512), "512.0 B");
/// ```
pub fn human_size(bytes: u64) -> String {
    let adjusted = Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary);
    format!("{:.1}", adjusted)
}

/// Fails with `ResourceLimitExceeded` when `size` is above `limit`.
#[inline]
pub fn check_size(path: &Path, size: u64, limit: u64) -> Result<()> {
    if size > limit {
        return Err(Error::ResourceLimitExceeded {
            path: path.display().to_string(),
            size: human_size(size),
            limit: human_size(limit),
        });
    }
    Ok(())
}

/// Reads a whole file after checking its size against `max_size`.
///
/// The size comes from file metadata, so an oversized file is rejected
/// without any of its content being read.
pub fn read_source(path: &Path, max_size: u64) -> Result<Vec<u8>> {
    let metadata = fs::metadata(path).map_err(|e| io_error_with_path(e, path))?;
    check_size(path, metadata.len(), max_size)?;
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_size_within_limit() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("file.txt");
        fs::write(&file_path, "1234567890")?;
        assert_eq!(read_source(&file_path, 10)?, b"1234567890");
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_size_exceeds_limit() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("file.txt");
        fs::write(&file_path, "123456")?;
        match read_source(&file_path, 5) {
            Err(Error::ResourceLimitExceeded { path, size, limit }) => {
                assert!(path.ends_with("file.txt"));
                assert_eq!(size, "6.0 B");
                assert_eq!(limit, "5.0 B");
            }
            other => panic!("Expected ResourceLimitExceeded, got {:?}", other),
        }
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_zero_limit_accepts_empty_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("empty.txt");
        fs::write(&file_path, "")?;
        assert!(read_source(&file_path, 0)?.is_empty());
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_source(Path::new("no_such_file_for_docpage.json"), 1024);
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0.0 B");
        assert_eq!(human_size(1536), "1.5 KiB");
        assert_eq!(human_size(10 * 1024 * 1024), "10.0 MiB");
    }
}
