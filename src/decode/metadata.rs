// src/decode/metadata.rs

use crate::core_types::FileMetadata;
use chrono::{DateTime, Local};
use log::debug;
use std::fs::{self, Permissions};
use std::path::Path;
use std::time::SystemTime;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reads permissions and timestamps for `path`.
///
/// Never fails: whatever the filesystem does not report is left as `None`.
pub fn file_metadata(path: &Path) -> FileMetadata {
    match fs::metadata(path) {
        Ok(metadata) => FileMetadata {
            permissions: Some(permission_string(
                &metadata.permissions(),
                metadata.is_dir(),
            )),
            created: metadata.created().ok().map(format_time),
            modified: metadata.modified().ok().map(format_time),
        },
        Err(e) => {
            debug!("No metadata for {}: {}", path.display(), e);
            FileMetadata::default()
        }
    }
}

/// Formats a point in time as local `YYYY-MM-DD HH:MM:SS`.
///
/// # Examples
///
/// ```
/// use docpage::decode::format_time;
/// use std::time::SystemTime;
///
/// let now = format_time(SystemTime::now());
/// assert_eq!(now.len(), "2024-01-01 00:00:00".len());
/// ```
pub fn format_time(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

#[cfg(unix)]
fn permission_string(permissions: &Permissions, is_dir: bool) -> String {
    use std::os::unix::fs::PermissionsExt;

    let mode = permissions.mode();
    let mut text = String::with_capacity(10);
    text.push(if is_dir { 'd' } else { '-' });
    for shift in [6, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        text.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        text.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        text.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    text
}

#[cfg(not(unix))]
fn permission_string(permissions: &Permissions, _is_dir: bool) -> String {
    if permissions.readonly() {
        "read-only".to_string()
    } else {
        "read-write".to_string()
    }
}
