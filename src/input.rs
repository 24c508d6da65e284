//! Trace input loading
//!
//! The whole trace is read into memory before extraction. Bytes that are
//! not valid UTF-8 are replaced rather than rejected.

use crate::error::{Result, TraceError};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read the trace from `path`, or from stdin when no path is given
pub fn read_trace(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => read_trace_file(path),
        None => read_trace_from(std::io::stdin().lock()).map_err(TraceError::StdinUnreadable),
    }
}

/// Read a trace log file; any open or read failure is `InputUnreadable`
pub fn read_trace_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| TraceError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read trace file");
    Ok(decode(bytes))
}

/// Read a trace from any byte stream
pub fn read_trace_from<R: Read>(mut reader: R) -> std::io::Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    debug!(bytes = bytes.len(), "read trace stream");
    Ok(decode(bytes))
}

fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    }
}
