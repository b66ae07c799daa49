//! CSV output for parse reports.

use super::report::Report;
use super::terminal::format_field;

/// Column header matching [`csv_row`].
pub fn csv_header() -> String {
    format!(
        "{cnt},{kind},{input},{value},{network},{mask}",
        cnt = format_field("cnt", 5),
        kind = format_field("kind", 6),
        input = format_field("input", 20),
        value = format_field("value", 20),
        network = format_field("network", 20),
        mask = format_field("mask", 20),
    )
}

/// One CSV row; address reports leave the network columns empty.
pub fn csv_row(i: usize, report: &Report) -> String {
    let or_empty = |v: Option<String>| v.unwrap_or_default();
    format!(
        "{cnt},{kind},{input},{value},{network},{mask}",
        cnt = format_field(i, 5),
        kind = format_field(report.kind, 6),
        input = format_field(report.input.replace('"', "\"\""), 20),
        value = format_field(report.value, 20),
        network = format_field(or_empty(report.network.map(|n| n.to_string())), 20),
        mask = format_field(or_empty(report.mask.map(|m| m.to_string())), 20),
    )
}
