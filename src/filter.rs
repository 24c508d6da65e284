//! Syscall filtering for -e trace= expressions
//!
//! Selects which path-carrying syscalls the extractor looks for.
//! Supports:
//! - Individual syscalls: -e trace=openat,stat
//! - The file class: -e trace=file (all path syscalls)

use crate::error::{Result, TraceError};
use std::collections::HashSet;

/// Syscalls whose first path argument the extractor understands
pub const PATH_SYSCALLS: [&str; 6] = ["openat", "open", "stat", "lstat", "access", "readlink"];

/// Syscall filter that determines which syscalls contribute paths
#[derive(Debug, Clone)]
pub struct SyscallFilter {
    /// Set of syscall names to include (None = all path syscalls)
    include: Option<HashSet<String>>,
}

impl Default for SyscallFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl SyscallFilter {
    /// Create a filter that includes all path syscalls
    pub fn all() -> Self {
        Self { include: None }
    }

    /// Parse a filter expression like "trace=open,stat" or "trace=file"
    pub fn from_expr(expr: &str) -> Result<Self> {
        match expr.strip_prefix("trace=") {
            Some(trace_spec) => Self::from_trace_spec(trace_spec),
            None => Err(TraceError::InvalidFilter(expr.to_string())),
        }
    }

    /// Parse a trace specification (the part after "trace=")
    fn from_trace_spec(spec: &str) -> Result<Self> {
        let mut syscalls = HashSet::new();

        for part in spec.split(',') {
            let part = part.trim();

            match part {
                "" => {}
                "file" => {
                    syscalls.extend(PATH_SYSCALLS.iter().map(|s| s.to_string()));
                }
                name if PATH_SYSCALLS.contains(&name) => {
                    syscalls.insert(name.to_string());
                }
                other => {
                    return Err(TraceError::UnsupportedSyscall {
                        name: other.to_string(),
                        supported: PATH_SYSCALLS.join(","),
                    });
                }
            }
        }

        Ok(Self {
            include: Some(syscalls),
        })
    }

    /// Check if a syscall should contribute paths
    pub fn should_trace(&self, syscall_name: &str) -> bool {
        match &self.include {
            None => true,
            Some(set) => set.contains(syscall_name),
        }
    }
}
