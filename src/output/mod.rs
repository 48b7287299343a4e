//! Report output for resolved subnet trees.
//!
//! This module handles formatting and persisting the report:
//! - [`report`] - the row model and the [`RowWriter`] seam
//! - [`csv`] - CSV file output
//! - [`terminal`] - colored terminal output and the startup banner
//! - [`save`] - choosing a format and writing the destination file

mod csv;
mod report;
mod save;
mod terminal;

pub use csv::{escape_csv_field, CsvWriter};
pub use report::{render_report, ReportRow, RowWriter, HEADERS};
pub use save::{save_report, ReportFormat};
pub use terminal::{about, format_field, TerminalWriter};
