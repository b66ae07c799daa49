//! Output formatting for the command line.
//!
//! - [`report`] - per-value report rows (also the `--json` payload)
//! - [`csv`] - CSV rendering of report rows
//! - [`terminal`] - field padding and colored verdicts

pub mod csv;
pub mod report;
pub mod terminal;

pub use csv::{csv_header, csv_row};
pub use report::Report;
pub use terminal::{format_field, format_verdict};
