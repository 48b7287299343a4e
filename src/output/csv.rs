//! CSV output for the subnet report.

use super::report::{ReportRow, RowWriter};
use itertools::Itertools;
use std::io::{self, Write};

/// Quote a field if it contains a comma or double quote.
pub fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        // also excel does not like spaces after comma between fields
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

/// Writes rows as CSV. Depth is shown as `indent_width` leading spaces per
/// level in the Subnet ID column.
pub struct CsvWriter<W: Write> {
    out: W,
    indent_width: usize,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(out: W, indent_width: usize) -> CsvWriter<W> {
        CsvWriter { out, indent_width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<'a, I: IntoIterator<Item = &'a str>>(&mut self, cells: I) -> io::Result<()> {
        let line = cells.into_iter().map(escape_csv_field).join(",");
        writeln!(self.out, "{line}")
    }
}

impl<W: Write> RowWriter for CsvWriter<W> {
    fn write_header(&mut self, headers: &[&str]) -> io::Result<()> {
        self.write_line(headers.iter().copied())
    }

    fn write_row(&mut self, indent: usize, row: &ReportRow) -> io::Result<()> {
        let subnet_id = format!(
            "{:width$}{}",
            "",
            row.subnet_id,
            width = indent * self.indent_width
        );
        let [_, mask, hosts, first, last] = row.cells();
        self.write_line([subnet_id.as_str(), mask, hosts, first, last])
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
