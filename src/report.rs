//! Human-readable text report

use crate::categorize::CategorizedReport;
use crate::size::{describe, SizeProbe};

/// Name shown in the banner when none is given
pub const DEFAULT_TARGET: &str = "llama-server";

/// Width of banner and section rules
const RULE_WIDTH: usize = 80;

/// Render the categorized paths as a text report
///
/// Each path is looked up through `probe` as it is written, so lookups
/// happen in report order.
pub fn render_text(report: &CategorizedReport, target: &str, probe: &dyn SizeProbe) -> String {
    let banner = "=".repeat(RULE_WIDTH);
    let rule = "-".repeat(RULE_WIDTH);
    let mut output = String::new();

    output.push_str(&format!("{banner}\nFILES ACCESSED BY {target}\n{banner}\n"));

    for (category, paths) in report.sections() {
        output.push_str(&format!(
            "\n{} ({} files):\n{rule}\n",
            category.label(),
            paths.len()
        ));
        for path in paths {
            output.push_str(&format!("  {path}{}\n", describe(probe.probe(path))));
        }
    }

    output.push_str(&format!(
        "\n{banner}\nTOTAL FILES: {}\n{banner}\n",
        report.total()
    ));
    output
}
