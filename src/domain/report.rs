//! Report formatting: one aligned text row per port.
//!
//! ```text
//! Port 443   │ ████████████████▊░░░░░░░░░░░░ │      456
//! ```

use crate::domain::bars::render_bar;
use crate::domain::{DomainError, ExposureDataset};

/// Fixed field geometry of a report row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLayout {
    /// Total characters per row.
    pub line_length: usize,
    pub prefix: &'static str,
    pub label_width: usize,
    pub count_width: usize,
    pub separator: &'static str,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            line_length: 53,
            prefix: "Port ",
            label_width: 5,
            count_width: 8,
            separator: " │ ",
        }
    }
}

impl ReportLayout {
    /// Cells left for the bar once the fixed-width fields are laid out.
    pub fn bar_width(&self) -> usize {
        self.line_length
            .saturating_sub(self.prefix.chars().count())
            .saturating_sub(self.label_width)
            .saturating_sub(self.count_width)
            .saturating_sub(2 * self.separator.chars().count())
    }

    fn format_line(&self, label: &str, bar: &str, count: u64) -> String {
        format!(
            "{prefix}{label:<lw$}{sep}{bar}{sep}{count:>cw$}",
            prefix = self.prefix,
            sep = self.separator,
            lw = self.label_width,
            cw = self.count_width,
        )
    }
}

/// Formats every port of `dataset` against `max_count` as 100 %.
///
/// Rows keep the dataset order and are joined with `\n`.
pub fn format_report(
    dataset: &ExposureDataset,
    max_count: u64,
    layout: &ReportLayout,
) -> Result<String, DomainError> {
    if max_count == 0 {
        return Err(DomainError::NonPositiveCount {
            what: "max count",
            value: max_count,
        });
    }

    let width = layout.bar_width();
    let lines: Vec<String> = dataset
        .ports()
        .iter()
        .map(|port| {
            let percent = port.count as f64 / max_count as f64 * 100.0;
            let bar = render_bar(percent, width);
            layout.format_line(&port.label, &bar, port.count)
        })
        .collect();
    Ok(lines.join("\n"))
}
