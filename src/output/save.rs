//! Persisting a report to its destination file.

use super::csv::CsvWriter;
use super::report::render_report;
use crate::error::SubnetError;
use crate::processing::Resolution;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// File format of the saved report, chosen from the destination extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    pub fn from_path(path: &Path) -> ReportFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ReportFormat::Json,
            _ => ReportFormat::Csv,
        }
    }
}

/// Write the report for `resolution` to `path`.
///
/// Any I/O or encoding failure is returned as [`SubnetError::PersistenceFailure`].
pub fn save_report(
    resolution: &Resolution,
    path: &Path,
    indent_width: usize,
) -> Result<(), SubnetError> {
    let format = ReportFormat::from_path(path);
    log::info!(
        "#Start save_report() {} rows as {:?} to {}",
        resolution.record_count(),
        format,
        path.display()
    );

    write_file(resolution, path, format, indent_width).map_err(|source| {
        log::error!("saving {} failed: {}", path.display(), source);
        SubnetError::PersistenceFailure {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_file(
    resolution: &Resolution,
    path: &Path,
    format: ReportFormat,
    indent_width: usize,
) -> io::Result<()> {
    let file = BufWriter::new(File::create(path)?);
    match format {
        ReportFormat::Csv => {
            let mut writer = CsvWriter::new(file, indent_width);
            render_report(resolution, &mut writer)
        }
        ReportFormat::Json => {
            let mut file = file;
            serde_json::to_writer_pretty(&mut file, resolution).map_err(io::Error::other)?;
            writeln!(file)?;
            file.flush()
        }
    }
}
