//! Terminal output formatter for scan results.
//!
//! This module prints everything a user sees on the console: the banner,
//! live progress dots and warnings (through [`ConsoleReporter`]), and the
//! final report with its two size-sorted tables.

use crate::config::{MaxDepth, ScanConfig};
use crate::data::SizedEntry;
use crate::output::Reporter;
use crate::scan::ScanReport;
use crate::utils::format_size;
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

/// Prints progress dots to stdout and warnings to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn progress(&mut self) {
        let mut stdout = io::stdout().lock();
        // Progress is best-effort; a closed stdout shows up when the report is printed.
        let _ = stdout.write_all(b".");
        let _ = stdout.flush();
    }

    fn warning(&mut self, message: &str) {
        eprintln!("Warning: {message}");
    }
}

/// Prints the scan banner: the resolved root and the effective depth limit.
pub fn print_banner(root: &Path, max_depth: MaxDepth) {
    println!("Scanning {}...", root.display());
    println!("Max depth: {max_depth}");
}

/// Renders a finished scan to stdout.
///
/// # Arguments
/// * `report` - The finished scan, with both lists already sorted
/// * `config` - The scan options; the error summary is only printed when
///   warnings were not already shown one by one
///
/// # Errors
/// Returns an error if stdout cannot be written.
pub fn render(report: &ScanReport, config: &ScanConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, report, !config.show_warnings)?;
    out.flush()?;
    Ok(())
}

/// Writes the report: timing, optional error summary, then the directory
/// and file tables.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &ScanReport,
    show_error_summary: bool,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "Scan completed in {:.2} seconds",
        report.elapsed.as_secs_f64()
    )?;

    if show_error_summary && !report.errors.is_empty() {
        writeln!(out)?;
        writeln!(out, "Encountered errors (use --warnings to see details):")?;
        for (kind, count) in report.errors.iter() {
            writeln!(out, "  - {}: {}", kind.as_str(), count)?;
        }
    }

    write_table(out, "DIRECTORIES", &report.dirs)?;
    write_table(out, "FILES", &report.files)
}

fn write_table<W: Write>(out: &mut W, title: &str, entries: &[SizedEntry]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "===== {title} (smallest to largest) =====")?;
    for entry in entries {
        writeln!(out, "{}", format_row(entry))?;
    }
    Ok(())
}

/// Formats one table row: size right-aligned in 10 columns, label
/// left-aligned in 12, then the path.
pub fn format_row(entry: &SizedEntry) -> String {
    format!(
        "{:>10} {:<12} {}",
        format_size(entry.size),
        entry.kind.label(),
        entry.path.display()
    )
}
