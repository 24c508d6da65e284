//! Error types for trace path extraction

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and parsing a trace log
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Cannot read trace input {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read trace input from stdin: {0}")]
    StdinUnreadable(#[source] std::io::Error),

    #[error("Invalid filter expression: {0}. Expected format: trace=SPEC")]
    InvalidFilter(String),

    #[error("Unsupported syscall in filter: {name} (supported: {supported})")]
    UnsupportedSyscall { name: String, supported: String },

    #[error("Failed to compile pattern for {syscall}: {source}")]
    Pattern {
        syscall: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Result type for trace path operations
pub type Result<T> = std::result::Result<T, TraceError>;
