//! Console output: run statistics, column ruler, and the rendered report.

use crate::domain::RunSummary;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Column markers for the first 54 characters of a report row.
pub const RULER: &str = "        10        20        30        40        50  54\n\
                         123456789012345678901234567890123456789012345678901234";

/// Statistics block followed by a blank line and the ruler.
pub fn summary_text(summary: &RunSummary) -> String {
    let mut out = String::new();
    let rows = [
        ("Locale", summary.locale.clone()),
        ("Min", summary.stats.min_count.to_string()),
        ("Max", summary.stats.max_count.to_string()),
        ("Min order of magnitude", summary.magnitudes.min.to_string()),
        ("Max order of magnitude", summary.magnitudes.max.to_string()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{:<22}: {}", label, value);
    }
    out.push('\n');
    out.push_str(RULER);
    out.push('\n');
    out
}

/// Prints the statistics, ruler, title and report to stdout.
pub fn print_run(summary: &RunSummary) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(summary_text(summary).as_bytes())?;
    writeln!(out, "{}\n{}", summary.title, summary.report)?;
    out.flush()
}
