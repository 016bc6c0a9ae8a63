//! CLI interface definitions for the `rusize` application.
//!
//! This module defines command-line arguments using [`clap`] and converts
//! them into the immutable [`ScanConfig`] used by the scanner.
//!
//! # Example
//!
//! ```bash
//! rusize --path ~/projects --max-depth -1 --no-hidden --warnings
//! ```

use crate::config::{MaxDepth, ScanConfig};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for `rusize`.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use rusize::Args;
///
/// let args = Args::parse_from(["rusize", "-d", "-1", "--no-progress"]);
/// assert!(!args.scan_config().show_progress);
/// ```
#[derive(Parser, Debug)]
#[command(name = "rusize", version, about = "List directories and files sorted by size.")]
pub struct Args {
    /// Maximum recursion depth for directory scanning (use -1 for unlimited)
    #[arg(
        short = 'd',
        long,
        value_name = "N",
        default_value_t = 2,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-1..)
    )]
    pub max_depth: i64,

    /// Show a warning for every entry that cannot be read
    #[arg(short, long)]
    pub warnings: bool,

    /// Skip hidden files and directories
    #[arg(short = 'H', long)]
    pub no_hidden: bool,

    /// Directory to scan
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Don't show the progress indicator
    #[arg(long)]
    pub no_progress: bool,

    /// Also write the results to a CSV file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print debug logging to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the scan configuration from the parsed flags.
    pub fn scan_config(&self) -> ScanConfig {
        ScanConfig {
            max_depth: MaxDepth::from_cli(self.max_depth),
            show_progress: !self.no_progress,
            show_warnings: self.warnings,
            include_hidden: !self.no_hidden,
        }
    }
}
