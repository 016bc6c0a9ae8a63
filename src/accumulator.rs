//! Recursive size accumulation for a single top-level entry.
//!
//! [`SizeAccumulator`] walks the subtree below one path and adds up the
//! apparent size of everything it finds:
//! - directories contribute their own entry size plus their contents
//! - regular files contribute their length
//! - symlinks contribute the size of the link itself and are never followed
//!
//! Directories are descended into at most once per accumulator, keyed by
//! `(device, inode)`, which stops bind-mount and symlink cycles. Depth is
//! bounded by [`ScanConfig::max_depth`]. Every error is recorded in the
//! shared [`ErrorTally`] and the walk carries on.
//!
//! The traversal runs on `walkdir`'s explicit stack rather than the call
//! stack, so arbitrarily deep trees are safe with an unlimited depth.

use crate::config::{MaxDepth, ScanConfig};
use crate::data::{ErrorKind, ErrorTally};
use crate::output::Reporter;
use crate::utils::{FileId, is_hidden};
use fnv::FnvHashSet;
use log::debug;
use std::fmt;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Context for sizing one top-level entry.
///
/// The visited set lives exactly as long as the accumulator, so create a new
/// one for every top-level entry. The error tally and the reporter are
/// borrowed and shared across the whole scan.
pub struct SizeAccumulator<'a, R: Reporter + ?Sized> {
    config: &'a ScanConfig,
    errors: &'a mut ErrorTally,
    reporter: &'a mut R,
    visited: FnvHashSet<FileId>,
}

impl<'a, R: Reporter + ?Sized> SizeAccumulator<'a, R> {
    pub fn new(config: &'a ScanConfig, errors: &'a mut ErrorTally, reporter: &'a mut R) -> Self {
        Self {
            config,
            errors,
            reporter,
            visited: FnvHashSet::default(),
        }
    }

    /// Computes the total size of everything below `path`.
    ///
    /// `path` is treated as depth 0 and is followed if it is a symlink.
    /// The returned size does not include the entry size of `path` itself.
    ///
    /// Never fails: unreadable entries are tallied, optionally reported as
    /// warnings, and contribute nothing.
    pub fn compute_size(mut self, path: &Path) -> u64 {
        if self.config.show_progress {
            self.reporter.progress();
        }
        debug!("Sizing '{}' (max depth {})", path.display(), self.config.max_depth);

        match FileId::of(path) {
            Ok(id) => {
                self.visited.insert(id);
            }
            Err(err) => {
                self.record(
                    ErrorKind::from_io(&err),
                    format_args!("Cannot access {}: {}", path.display(), err),
                );
                return 0;
            }
        }

        let mut walker = WalkDir::new(path).min_depth(1).follow_links(false);
        if let MaxDepth::Limited(max) = self.config.max_depth {
            // Entries one level below the deepest readable directory are still
            // counted, their contents are not.
            walker = walker.max_depth(max.saturating_add(1));
        }

        let include_hidden = self.config.include_hidden;
        let mut entries = walker
            .into_iter()
            .filter_entry(move |entry| include_hidden || !is_hidden(entry.file_name()));

        let mut total = 0u64;
        while let Some(result) = entries.next() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    let failed = err.path().unwrap_or(path).to_path_buf();
                    self.record(
                        ErrorKind::from_walk(&err),
                        format_args!("Cannot access {}: {}", failed.display(), io_message(&err)),
                    );
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                // A directory whose own stat fails is reported when it is read.
                total += entry.metadata().map(|md| md.len()).unwrap_or(0);
                if self.config.max_depth.allows(entry.depth()) && !self.first_visit(&entry) {
                    entries.skip_current_dir();
                }
            } else if file_type.is_file() || file_type.is_symlink() {
                total += self.entry_len(&entry);
            }
        }

        debug!("'{}' totals {} bytes", path.display(), total);
        total
    }

    /// Marks a directory as visited. Returns `false` if its contents must not
    /// be read, either because it was already counted or because it cannot
    /// be stat'ed.
    fn first_visit(&mut self, entry: &DirEntry) -> bool {
        match FileId::of(entry.path()) {
            Ok(id) => {
                let first = self.visited.insert(id);
                if !first {
                    debug!("Already counted '{}', not descending", entry.path().display());
                }
                first
            }
            Err(err) => {
                self.record(
                    ErrorKind::from_io(&err),
                    format_args!("Cannot access {}: {}", entry.path().display(), err),
                );
                false
            }
        }
    }

    /// Size of a file or of a symlink object (`lstat`), or 0 if it cannot be read.
    fn entry_len(&mut self, entry: &DirEntry) -> u64 {
        match entry.metadata() {
            Ok(md) => md.len(),
            Err(err) => {
                self.record(
                    ErrorKind::from_walk(&err),
                    format_args!("Skipping {}: {}", entry.path().display(), io_message(&err)),
                );
                0
            }
        }
    }

    fn record(&mut self, kind: ErrorKind, message: fmt::Arguments<'_>) {
        self.errors.record(kind);
        if self.config.show_warnings {
            self.reporter.warning(&message.to_string());
        }
    }
}

/// Computes the size below `path` with a fresh visited set.
///
/// See [`SizeAccumulator::compute_size`].
pub fn compute_size<R: Reporter + ?Sized>(
    path: &Path,
    config: &ScanConfig,
    errors: &mut ErrorTally,
    reporter: &mut R,
) -> u64 {
    SizeAccumulator::new(config, errors, reporter).compute_size(path)
}

/// The underlying OS message of a traversal error, without walkdir's path prefix.
fn io_message(err: &walkdir::Error) -> String {
    match err.io_error() {
        Some(io_err) => io_err.to_string(),
        None => err.to_string(),
    }
}
