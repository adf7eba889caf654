//! Run report formatting for human-readable or JSON output.

use crate::distribution::Distribution;
use crate::pipeline::RunReport;
use serde::Serialize;

/// Format a run report for the terminal.
///
/// # Examples
///
/// ```
/// use bomgen_generator::output::format_human;
/// use bomgen_generator::pipeline::RunReport;
///
/// let report = RunReport {
///     distributions: Vec::new(),
///     written: Vec::new(),
///     dry_run: false,
/// };
/// assert!(format_human(&report).contains("No distributions"));
/// ```
#[must_use]
pub fn format_human(report: &RunReport) -> String {
    if report.distributions.is_empty() {
        return String::from("No distributions reconciled.");
    }

    let mut output = String::from("Reconciled distributions:\n");
    for distribution in &report.distributions {
        output.push_str(&format!(
            "  {} ({}): {} dependencies\n",
            distribution.name().display(),
            distribution.archive(),
            distribution.coordinates().len()
        ));
    }

    if report.dry_run {
        output.push_str("\nDry run: no BOMs written.");
    } else {
        output.push_str("\nWrote:\n");
        for path in &report.written {
            output.push_str(&format!("  {path}\n"));
        }
    }

    output.trim_end().to_owned()
}

/// Format a run report as pretty-printed JSON.
#[must_use]
pub fn format_json(report: &RunReport) -> String {
    let json = RunReportJson {
        distributions: &report.distributions,
        written: report.written.iter().map(ToString::to_string).collect(),
        dry_run: report.dry_run,
    };
    serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_owned())
}

#[derive(Serialize)]
struct RunReportJson<'a> {
    distributions: &'a [Distribution],
    written: Vec<String>,
    dry_run: bool,
}
