//! Output for the `rusize` application.
//!
//! # Available Formatters
//!
//! - **Terminal**: banner, progress dots, error summary and the two
//!   size-sorted tables
//! - **CSV**: machine-readable export of the same report
//!
//! Progress markers and warnings are emitted while the scan is running, so the
//! scanning code talks to them through the [`Reporter`] trait rather than
//! printing directly.

pub mod csv;
pub mod terminal;

/// CSV output renderer function.
///
/// See [`csv::render`] for full documentation.
pub use self::csv::render as render_csv;

/// Terminal output renderer function.
///
/// See [`terminal::render`] for full documentation.
pub use self::terminal::render as render_terminal;

pub use self::terminal::ConsoleReporter;

/// Receives live feedback from a running scan.
pub trait Reporter {
    /// Called once per progress step.
    fn progress(&mut self);

    /// Called with a description of an entry that could not be read.
    fn warning(&mut self, message: &str);
}

/// A [`Reporter`] that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn progress(&mut self) {}

    fn warning(&mut self, _message: &str) {}
}
