//! Turning a [`Resolution`] into report rows.

use crate::models::SubnetRecord;
use crate::processing::Resolution;
use std::io;

/// Column titles of the report.
pub const HEADERS: [&str; 5] = [
    "Subnet ID",
    "Subnet Mask",
    "Usable Hosts",
    "First Host",
    "Last Host",
];

/// One report line. Input echo rows only fill `subnet_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportRow {
    pub subnet_id: String,
    pub subnet_mask: String,
    pub usable_hosts: String,
    pub first_host: String,
    pub last_host: String,
}

impl ReportRow {
    pub fn echo(input: &str) -> ReportRow {
        ReportRow {
            subnet_id: input.to_string(),
            ..Default::default()
        }
    }

    pub fn cells(&self) -> [&str; 5] {
        [
            self.subnet_id.as_str(),
            self.subnet_mask.as_str(),
            self.usable_hosts.as_str(),
            self.first_host.as_str(),
            self.last_host.as_str(),
        ]
    }
}

impl From<&SubnetRecord> for ReportRow {
    fn from(record: &SubnetRecord) -> Self {
        ReportRow {
            subnet_id: record.cidr(),
            subnet_mask: record.netmask.to_string(),
            usable_hosts: record.usable_hosts.to_string(),
            first_host: record.first_host.to_string(),
            last_host: record.last_host.to_string(),
        }
    }
}

/// Destination for report rows. `indent` is the tree depth; how it is shown
/// is up to the writer.
pub trait RowWriter {
    fn write_header(&mut self, headers: &[&str]) -> io::Result<()>;
    fn write_row(&mut self, indent: usize, row: &ReportRow) -> io::Result<()>;
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Write the header, then for each input its echo row followed by its subnets.
pub fn render_report<W: RowWriter>(resolution: &Resolution, writer: &mut W) -> io::Result<()> {
    writer.write_header(&HEADERS)?;
    for network in &resolution.networks {
        writer.write_row(0, &ReportRow::echo(&network.input))?;
        for record in &network.subnets {
            writer.write_row(record.depth as usize, &ReportRow::from(record))?;
        }
    }
    writer.finish()
}
