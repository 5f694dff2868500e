//! Summary artifacts: pretty JSON document and CSV comparison table.
//!
//! The CSV uses `\r\n` row terminators so regenerated tables diff cleanly
//! against ones already committed. Writes are not transactional. A failed
//! write may leave a partial file behind; re-running overwrites it.

use crate::domain::{ComparisonRow, Result, Summary, SummaryError};
use std::path::Path;

/// CSV row terminator.
pub const CSV_LINE_END: &str = "\r\n";

/// Fixed CSV column order.
pub const COMPARISON_COLUMNS: [&str; 7] = [
    "stage",
    "model",
    "accuracy",
    "precision",
    "recall",
    "f1_score",
    "roc_auc",
];

/// Write the summary as indented JSON, creating parent directories.
pub fn write_summary_json(path: &Path, summary: &Summary) -> Result<()> {
    let content = serde_json::to_string_pretty(summary)?;
    write_artifact(path, content.as_bytes())
}

/// Render the comparison table with a header row.
pub fn render_comparison_csv(rows: &[ComparisonRow]) -> String {
    let mut out = String::new();
    out.push_str(&COMPARISON_COLUMNS.join(","));
    out.push_str(CSV_LINE_END);
    for row in rows {
        let fields = [
            row.stage.as_str().to_string(),
            csv_field(&row.model),
            format_decimal(row.accuracy),
            format_decimal(row.precision),
            format_decimal(row.recall),
            format_decimal(row.f1_score),
            format_decimal(row.roc_auc),
        ];
        out.push_str(&fields.join(","));
        out.push_str(CSV_LINE_END);
    }
    out
}

/// Write the comparison table CSV, creating parent directories.
pub fn write_comparison_csv(path: &Path, rows: &[ComparisonRow]) -> Result<()> {
    write_artifact(path, render_comparison_csv(rows).as_bytes())
}

fn write_artifact(path: &Path, content: &[u8]) -> Result<()> {
    let write_err = |source| SummaryError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, content).map_err(write_err)
}

// Shortest round-trip form; whole numbers keep their ".0". Exponents are
// signed and at least two digits wide ("5e-05", "1e+16").
fn format_decimal(value: f64) -> String {
    let shortest = format!("{:?}", value);
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
