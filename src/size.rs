//! File size lookup for report annotation
//!
//! Every failure to stat a path (missing, permission denied, dangling
//! symlink) degrades to `FileStatus::NotFound`; it never aborts a report.

use std::path::Path;
use tracing::debug;

/// One mebibyte; sizes strictly above this get an annotation
pub const MIB: u64 = 1024 * 1024;

/// Result of looking a path up on the live filesystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// The path resolved; byte size of the target
    Size(u64),
    /// The path could not be resolved
    NotFound,
    /// No lookup was attempted
    Skipped,
}

impl FileStatus {
    /// Byte size, if known
    pub fn size_bytes(self) -> Option<u64> {
        match self {
            FileStatus::Size(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Stable status name for JSON and CSV output
    pub fn as_str(self) -> &'static str {
        match self {
            FileStatus::Size(_) => "found",
            FileStatus::NotFound => "not_found",
            FileStatus::Skipped => "skipped",
        }
    }
}

/// Source of file sizes for discovered paths
pub trait SizeProbe {
    fn probe(&self, path: &str) -> FileStatus;
}

/// Stats paths against the real filesystem, following symlinks
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl SizeProbe for FsProbe {
    fn probe(&self, path: &str) -> FileStatus {
        match std::fs::metadata(Path::new(path)) {
            Ok(meta) => FileStatus::Size(meta.len()),
            Err(err) => {
                debug!(path, error = %err, "size lookup failed");
                FileStatus::NotFound
            }
        }
    }
}

/// Never touches the filesystem (--no-stat)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

impl SizeProbe for NoProbe {
    fn probe(&self, _path: &str) -> FileStatus {
        FileStatus::Skipped
    }
}

/// Inline annotation appended to a path line in the text report
///
/// Sizes above 1 MiB render as ` (N.N MB)`; smaller files get nothing.
pub fn describe(status: FileStatus) -> String {
    match status {
        FileStatus::Size(bytes) if bytes > MIB => {
            format!(" ({:.1} MB)", bytes as f64 / MIB as f64)
        }
        FileStatus::Size(_) | FileStatus::Skipped => String::new(),
        FileStatus::NotFound => " (not found)".to_string(),
    }
}
