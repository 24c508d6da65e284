//! JSON output format for categorized trace paths

use crate::categorize::{CategorizedReport, Category};
use crate::size::SizeProbe;
use serde::{Deserialize, Serialize};

/// A single discovered path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonFile {
    pub path: String,
    /// Byte size (absent when not found or not looked up)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    /// "found", "not_found" or "skipped"
    pub status: String,
}

/// One non-empty category section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonCategory {
    /// Category key (e.g., "rocm_lib")
    pub category: String,
    /// Display label (e.g., "ROCM LIB")
    pub label: String,
    pub count: usize,
    pub files: Vec<JsonFile>,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    /// Name of the traced program
    pub target: String,
    pub categories: Vec<JsonCategory>,
    /// Unique paths across all categories
    pub total_files: usize,
}

impl JsonOutput {
    /// Create an empty JSON output structure
    pub fn new(target: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "tracepaths-json-v1".to_string(),
            target: target.to_string(),
            categories: Vec::new(),
            total_files: 0,
        }
    }

    /// Build from a categorized report, looking up each path's size
    pub fn from_report(report: &CategorizedReport, target: &str, probe: &dyn SizeProbe) -> Self {
        let mut output = Self::new(target);
        for (category, paths) in report.sections() {
            output.add_category(category, paths, probe);
        }
        output
    }

    /// Add a category section
    pub fn add_category(&mut self, category: Category, paths: &[String], probe: &dyn SizeProbe) {
        let files: Vec<JsonFile> = paths
            .iter()
            .map(|path| {
                let status = probe.probe(path);
                JsonFile {
                    path: path.clone(),
                    size_bytes: status.size_bytes(),
                    status: status.as_str().to_string(),
                }
            })
            .collect();

        self.total_files += files.len();
        self.categories.push(JsonCategory {
            category: category.key().to_string(),
            label: category.label().to_string(),
            count: files.len(),
            files,
        });
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
