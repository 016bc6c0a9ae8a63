//! Library crate for rusize
//!
//! `rusize` lists the immediate entries of a directory sorted by total size.
//! Subdirectories are sized by a bounded, loop-safe recursive descent that
//! keeps going when individual entries cannot be read.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Immutable scan options (`ScanConfig`, `MaxDepth`)
//! - [`data`]: Result records (`SizedEntry`, `EntryKind`, `ErrorTally`)
//! - [`accumulator`]: Recursive size computation for one top-level entry
//! - [`scan`]: Top-level scanning of the root directory
//! - [`output`]: Terminal and CSV output, live progress reporting
//! - [`utils`]: Inode identity, path helpers and size formatting

pub mod accumulator;
pub mod cli;
pub mod config;
pub mod data;
pub mod output;
pub mod scan;
pub mod utils;

pub use accumulator::{SizeAccumulator, compute_size};
pub use cli::Args;
pub use config::{MaxDepth, ScanConfig};
pub use data::{EntryKind, ErrorKind, ErrorTally, SizedEntry};
pub use scan::{ScanReport, scan_root};
