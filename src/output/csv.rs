//! CSV output formatter for scan results.
//!
//! This module exports a finished scan to CSV for further processing, one
//! record per top-level entry: directories first, then files, each in the
//! same smallest-to-largest order as the terminal tables.

use crate::data::SizedEntry;
use crate::scan::ScanReport;
use crate::utils::format_size;
use anyhow::{Context, Result};
use csv::Writer;
use std::fs::File;
use std::io;
use std::path::Path;

/// A single record of output.
///
/// # Fields
/// * `kind` - `DIR`, `FILE`, `DIR-LINK` or `FILE-LINK`
/// * `label` - The label shown in the terminal table
/// * `size_bytes` - Size in bytes
/// * `size_human` - Size as shown in the terminal table
/// * `path` - Full path of the entry
#[derive(Debug, serde::Serialize)]
pub struct CsvEntry {
    pub kind: &'static str,
    pub label: String,
    pub size_bytes: u64,
    pub size_human: String,
    pub path: String,
}

impl From<&SizedEntry> for CsvEntry {
    fn from(entry: &SizedEntry) -> Self {
        Self {
            kind: entry.kind.as_str(),
            label: entry.kind.label(),
            size_bytes: entry.size,
            size_human: format_size(entry.size),
            path: entry.path.display().to_string(),
        }
    }
}

/// Writes the report to `output` as CSV.
///
/// # Errors
/// Returns an error if the file cannot be created or written.
pub fn render(report: &ScanReport, output: &Path) -> Result<()> {
    let file = File::create(output)
        .with_context(|| format!("Failed to create CSV file '{}'", output.display()))?;
    write_csv(file, report)
        .with_context(|| format!("Failed to write CSV file '{}'", output.display()))?;
    eprintln!("CSV output written to: {}", output.display());
    Ok(())
}

/// Serializes every entry of the report into `writer`.
pub fn write_csv<W: io::Write>(writer: W, report: &ScanReport) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    for entry in report.dirs.iter().chain(&report.files) {
        csv_writer.serialize(CsvEntry::from(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}
