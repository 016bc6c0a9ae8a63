//! Main entry point for the `rusize` CLI application.
//!
//! `rusize` lists the files and subdirectories directly inside a directory,
//! sorted by total size, smallest first.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Installs the Ctrl-C handler and the logger
//! - Delegates sizing to [`scan_root`]
//! - Prints the report and, on request, writes a CSV copy
//!
//! # Exit Codes
//! - `0` on success
//! - `1` if the scan root cannot be listed, the CSV cannot be written, or the
//!   scan is interrupted

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug};
use rusize::output::{ConsoleReporter, render_csv, render_terminal, terminal};
use rusize::utils::resolve_root;
use rusize::{Args, scan_root};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::{self, Write};
use std::process::exit;

fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err:#}");
        exit(1);
    }
}

fn inner_main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logger")?;
    debug!("Command line arguments: {args:?}");

    ctrlc::set_handler(|| {
        let _ = io::stdout().flush();
        println!("\nOperation cancelled by user");
        exit(1);
    })
    .context("Failed to install Ctrl-C handler")?;

    let config = args.scan_config();
    let root = resolve_root(&args.path);

    terminal::print_banner(&root, config.max_depth);

    let report = scan_root(&root, &config, &mut ConsoleReporter)?;
    render_terminal(&report, &config)?;

    if let Some(output) = &args.output {
        render_csv(&report, output)?;
    }

    Ok(())
}
