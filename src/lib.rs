//! tracepaths - list the files a process touched from its syscall trace
//!
//! This library extracts filesystem paths from strace-style trace logs,
//! groups them into ROCm, server, system-library and other categories,
//! and renders the result as text, JSON or CSV with file sizes resolved
//! from the live filesystem.

pub mod categorize;
pub mod cli;
pub mod csv_output;
pub mod error;
pub mod extract;
pub mod filter;
pub mod input;
pub mod json_output;
pub mod report;
pub mod size;
