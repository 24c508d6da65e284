//! CSV output format for categorized trace paths

use crate::categorize::CategorizedReport;
use crate::size::{FileStatus, SizeProbe};

/// CSV record for a single discovered path
#[derive(Debug, Clone)]
pub struct CsvFile {
    pub category: &'static str,
    pub path: String,
    pub status: FileStatus,
}

/// CSV output formatter
#[derive(Debug, Default)]
pub struct CsvOutput {
    files: Vec<CsvFile>,
}

impl CsvOutput {
    /// Create a new CSV output formatter
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a categorized report, looking up each path's size
    pub fn from_report(report: &CategorizedReport, probe: &dyn SizeProbe) -> Self {
        let mut output = Self::new();
        for (category, paths) in report.sections() {
            for path in paths {
                output.add_file(CsvFile {
                    category: category.key(),
                    path: path.clone(),
                    status: probe.probe(path),
                });
            }
        }
        output
    }

    /// Add a path row
    pub fn add_file(&mut self, file: CsvFile) {
        self.files.push(file);
    }

    /// Escape CSV field (handle commas, quotes, line breaks)
    fn escape_field(field: &str) -> String {
        if field.contains([',', '"', '\n', '\r']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_file(file: &CsvFile) -> String {
        let size = file
            .status
            .size_bytes()
            .map(|bytes| bytes.to_string())
            .unwrap_or_default();
        [
            file.category.to_string(),
            Self::escape_field(&file.path),
            size,
            file.status.as_str().to_string(),
        ]
        .join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::from("category,path,size_bytes,status\n");
        for file in &self.files {
            output.push_str(&Self::format_file(file));
            output.push('\n');
        }
        output
    }
}
