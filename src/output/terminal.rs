//! Terminal output utilities.
//!
//! Colored tree rendering plus the startup banner of the binary.

use super::report::{ReportRow, RowWriter};
use colored::Colorize;
use std::io::{self, Write};

/// Format a value as a left-aligned field of at least `width` characters.
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    if value_str.len() >= width {
        value_str
    } else {
        format!("{value_str:<width$}")
    }
}

/// Prints rows as aligned columns, indenting the Subnet ID by depth.
pub struct TerminalWriter<W: Write> {
    out: W,
    indent_width: usize,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(out: W, indent_width: usize) -> TerminalWriter<W> {
        TerminalWriter { out, indent_width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TerminalWriter<io::Stdout> {
    pub fn stdout(indent_width: usize) -> TerminalWriter<io::Stdout> {
        TerminalWriter::new(io::stdout(), indent_width)
    }
}

const ID_WIDTH: usize = 44;
const ADDR_WIDTH: usize = 16;
const HOSTS_WIDTH: usize = 12;

impl<W: Write> RowWriter for TerminalWriter<W> {
    fn write_header(&mut self, headers: &[&str]) -> io::Result<()> {
        let widths = [ID_WIDTH, ADDR_WIDTH, HOSTS_WIDTH, ADDR_WIDTH, ADDR_WIDTH];
        let line: String = headers
            .iter()
            .zip(widths)
            .map(|(h, w)| format_field(h, w))
            .collect::<Vec<String>>()
            .join(" ");
        writeln!(self.out, "{}", line.bold())
    }

    fn write_row(&mut self, indent: usize, row: &ReportRow) -> io::Result<()> {
        if indent == 0 {
            return writeln!(self.out, "{}", row.subnet_id.on_blue());
        }
        let subnet_id = format!(
            "{:width$}{}",
            "",
            row.subnet_id,
            width = indent * self.indent_width
        );
        writeln!(
            self.out,
            "{id} {mask} {hosts} {first} {last}",
            id = format_field(subnet_id, ID_WIDTH),
            mask = format_field(&row.subnet_mask, ADDR_WIDTH),
            hosts = format_field(&row.usable_hosts, HOSTS_WIDTH).green(),
            first = format_field(&row.first_host, ADDR_WIDTH),
            last = format_field(&row.last_host, ADDR_WIDTH),
        )
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Introduction banner printed at startup.
pub fn about() -> String {
    let title = format!(
        "IPv4 address subnetting {}",
        env!("CARGO_PKG_VERSION")
    );
    let rule = "-".repeat(20);
    format!(
        "{rule}{title}{rule}\n{}",
        "-".repeat(title.len() + 2 * rule.len())
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::render_report;
    use crate::processing::resolve_multiple;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "test      ");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "long_value");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 4), "42  ");
    }

    #[test]
    fn test_terminal_writer() {
        colored::control::set_override(false);
        let res = resolve_multiple(&["10.0.0.0/29"], 30).unwrap();
        let mut writer = TerminalWriter::new(Vec::new(), 2);
        render_report(&res, &mut writer).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Subnet ID"));
        assert_eq!(lines[1], "10.0.0.0/29");
        assert!(lines[2].starts_with("  10.0.0.0/30 "));
        assert!(lines[3].starts_with("  10.0.0.4/30 "));
        assert!(lines[3].trim_end().ends_with("10.0.0.6"));
    }

    #[test]
    fn test_about() {
        assert!(about().contains(env!("CARGO_PKG_VERSION")));
    }
}
