//! Path extraction from textual syscall traces
//!
//! Scans strace-style lines (`openat(AT_FDCWD, "/etc/ld.so.cache", ...) = 3`)
//! for the quoted path argument of the path-carrying syscalls, drops kernel
//! pseudo-filesystem entries and returns the unique paths in sorted order.
//!
//! Matching is unanchored: a pattern hits wherever
//! `name("...` appears on the line, and every hit of every active pattern
//! is collected.

use crate::error::{Result, TraceError};
use crate::filter::SyscallFilter;
use regex::Regex;
use std::collections::BTreeSet;
use std::io::BufRead;
use tracing::{debug, trace};

/// Path prefixes of virtual filesystems that never hold on-disk files
pub const PSEUDO_FS_PREFIXES: [&str; 3] = ["/dev/", "/proc/", "/sys/"];

/// Characters that end a trace line, `\r\n` included as `\r` then `\n`
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Pattern per syscall; capture group 1 is the path
const SYSCALL_PATTERNS: [(&str, &str); 6] = [
    ("openat", r#"openat\([^,]+,\s*"([^"]+)""#),
    ("open", r#"open\("([^"]+)""#),
    ("stat", r#"stat\("([^"]+)""#),
    ("lstat", r#"lstat\("([^"]+)""#),
    ("access", r#"access\("([^"]+)""#),
    ("readlink", r#"readlink\("([^"]+)""#),
];

#[derive(Debug, Clone)]
struct SyscallPattern {
    syscall: &'static str,
    regex: Regex,
}

/// Compiled set of syscall path patterns
#[derive(Debug, Clone)]
pub struct PathExtractor {
    patterns: Vec<SyscallPattern>,
}

impl PathExtractor {
    /// Extractor matching every supported path syscall
    pub fn new() -> Result<Self> {
        Self::from_filter(&SyscallFilter::all())
    }

    /// Extractor matching only the syscalls the filter lets through
    pub fn from_filter(filter: &SyscallFilter) -> Result<Self> {
        let patterns = SYSCALL_PATTERNS
            .iter()
            .filter(|(syscall, _)| filter.should_trace(syscall))
            .map(|&(syscall, pattern)| {
                Regex::new(pattern)
                    .map(|regex| SyscallPattern { syscall, regex })
                    .map_err(|source| TraceError::Pattern { syscall, source })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Names of the syscalls this extractor matches, in evaluation order
    pub fn syscalls(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.syscall)
    }

    /// Extract the unique, sorted paths from a whole trace text
    pub fn extract(&self, trace_text: &str) -> Vec<String> {
        let mut paths = BTreeSet::new();
        let mut lines = 0usize;
        for line in split_lines(trace_text) {
            self.collect_line(line, &mut paths);
            lines += 1;
        }
        debug!(lines, unique_paths = paths.len(), "extracted trace paths");
        paths.into_iter().collect()
    }

    /// Extract paths line by line from a reader without buffering the whole input
    ///
    /// Invalid UTF-8 is decoded lossily, so a stray binary line cannot stop the scan.
    pub fn extract_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<Vec<String>> {
        let mut paths = BTreeSet::new();
        let mut buf = Vec::new();
        let mut lines = 0usize;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // A chunk ends at '\n' but may still hold other line breaks
            for line in split_lines(&String::from_utf8_lossy(&buf)) {
                self.collect_line(line, &mut paths);
                lines += 1;
            }
        }

        debug!(lines, unique_paths = paths.len(), "extracted trace paths");
        Ok(paths.into_iter().collect())
    }

    fn collect_line(&self, line: &str, paths: &mut BTreeSet<String>) {
        for pattern in &self.patterns {
            for caps in pattern.regex.captures_iter(line) {
                let Some(path) = caps.get(1).map(|m| m.as_str()) else {
                    continue;
                };
                if is_pseudo_fs(path) {
                    debug!(path, syscall = pattern.syscall, "skipping pseudo-filesystem path");
                    continue;
                }
                if paths.insert(path.to_string()) {
                    trace!(path, syscall = pattern.syscall, "new path");
                }
            }
        }
    }
}

/// Split text at every line break, including `\r`, vertical tab, form
/// feed, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators
///
/// Empty pieces (between `\r` and `\n`, or at the end) carry no paths and
/// are harmless to scan.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(LINE_BREAKS)
}

/// True for paths under /dev, /proc or /sys
pub fn is_pseudo_fs(path: &str) -> bool {
    PSEUDO_FS_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
}

/// Extract unique, sorted paths using every supported syscall pattern
pub fn extract(trace_text: &str) -> Result<Vec<String>> {
    Ok(PathExtractor::new()?.extract(trace_text))
}
