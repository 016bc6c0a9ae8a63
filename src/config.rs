//! Scan configuration for `rusize`.
//!
//! [`ScanConfig`] is built once from the command line (see
//! [`crate::cli::Args::scan_config`]) and passed by reference to the scan
//! driver and the size accumulator. It never changes during a run.

use std::fmt;

/// How far below a top-level entry the size accumulator descends.
///
/// The top-level entry itself is depth 0. The contents of a directory at
/// depth `d` are only enumerated while `d <= n` for `Limited(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxDepth {
    Limited(usize),
    Unlimited,
}

impl MaxDepth {
    /// Converts the command-line value, where any negative number means unlimited.
    pub fn from_cli(value: i64) -> Self {
        usize::try_from(value).map_or(MaxDepth::Unlimited, MaxDepth::Limited)
    }

    /// Returns `true` if the contents of a directory at `depth` should be read.
    pub fn allows(&self, depth: usize) -> bool {
        match self {
            MaxDepth::Limited(max) => depth <= *max,
            MaxDepth::Unlimited => true,
        }
    }
}

impl Default for MaxDepth {
    fn default() -> Self {
        MaxDepth::Limited(2)
    }
}

impl fmt::Display for MaxDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxDepth::Limited(max) => write!(f, "{max}"),
            MaxDepth::Unlimited => f.write_str("unlimited"),
        }
    }
}

/// Immutable options controlling a single scan.
///
/// # Fields
/// * `max_depth` - Depth limit for recursive sizing
/// * `show_progress` - Print a progress dot per sized entry
/// * `show_warnings` - Print a warning line for every entry that could not be read
/// * `include_hidden` - Count entries whose name starts with `.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub max_depth: MaxDepth,
    pub show_progress: bool,
    pub show_warnings: bool,
    pub include_hidden: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: MaxDepth::default(),
            show_progress: true,
            show_warnings: false,
            include_hidden: true,
        }
    }
}
