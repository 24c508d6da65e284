//! CLI argument parsing for tracepaths

use crate::report::DEFAULT_TARGET;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the path report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "tracepaths")]
#[command(version)]
#[command(
    about = "List and categorize the files a process touched, from its strace log",
    long_about = None
)]
pub struct Cli {
    /// Trace log to read (reads stdin when omitted)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Limit which syscalls contribute paths (e.g., -e trace=openat,stat or -e trace=file)
    #[arg(short = 'e', long = "expr", value_name = "EXPR")]
    pub filter: Option<String>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Program name shown in the report banner
    #[arg(long = "target", value_name = "NAME", default_value = DEFAULT_TARGET)]
    pub target: String,

    /// Do not stat discovered paths (no size or not-found annotations)
    #[arg(long = "no-stat")]
    pub no_stat: bool,

    /// Enable debug tracing output on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
