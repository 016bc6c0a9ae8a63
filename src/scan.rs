//! Top-level scanning for `rusize`.
//!
//! [`scan_root`] lists the immediate children of the scan root (one level
//! only) and produces one [`SizedEntry`] per child:
//! - directories are sized with a fresh [`SizeAccumulator`](crate::accumulator::SizeAccumulator)
//! - regular files use their length
//! - a symlink to a directory is followed and sized like a directory
//! - any other symlink reports the size of its target (0 when broken)
//!
//! Only a failure to list the root itself is an error; everything below it is
//! tallied in the report's [`ErrorTally`].

use crate::accumulator::compute_size;
use crate::config::ScanConfig;
use crate::data::{EntryKind, ErrorKind, ErrorTally, SizedEntry};
use crate::output::Reporter;
use crate::utils::{is_hidden, sort_entries};
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// The outcome of scanning one root directory.
///
/// # Fields
/// * `root` - The directory that was scanned
/// * `dirs` - Directories and directory symlinks, smallest first
/// * `files` - Files and other symlinks, smallest first
/// * `errors` - Every non-fatal error met during the scan
/// * `elapsed` - Wall-clock time of the scan
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub root: PathBuf,
    pub dirs: Vec<SizedEntry>,
    pub files: Vec<SizedEntry>,
    pub errors: ErrorTally,
    pub elapsed: Duration,
}

/// Sizes every immediate child of `root`.
///
/// Children are visited in file name order, so entries of equal size are
/// listed alphabetically.
///
/// # Errors
/// Returns an error if `root` cannot be listed. Failures on individual
/// children are recorded in [`ScanReport::errors`] instead.
pub fn scan_root<R: Reporter + ?Sized>(
    root: &Path,
    config: &ScanConfig,
    reporter: &mut R,
) -> Result<ScanReport> {
    let start = Instant::now();
    let mut errors = ErrorTally::new();

    let read_dir =
        fs::read_dir(root).with_context(|| format!("Cannot scan directory {}", root.display()))?;

    let mut children = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => children.push(entry),
            Err(err) => record(
                config,
                &mut errors,
                reporter,
                &err,
                format!("Skipping {}: {}", root.display(), err),
            ),
        }
    }
    children.sort_by_key(DirEntry::file_name);
    debug!("'{}' has {} entries", root.display(), children.len());

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in children {
        if !config.include_hidden && is_hidden(&entry.file_name()) {
            continue;
        }

        match size_entry(&entry, config, &mut errors, reporter) {
            Ok(sized) => {
                match sized {
                    Some(sized) if sized.kind.is_dir() => dirs.push(sized),
                    Some(sized) => files.push(sized),
                    None => debug!("Ignoring special file '{}'", entry.path().display()),
                }
                if config.show_progress {
                    reporter.progress();
                }
            }
            Err(err) => {
                let message = format!("Skipping {}: {}", entry.path().display(), err);
                record(config, &mut errors, reporter, &err, message);
            }
        }
    }

    sort_entries(&mut dirs);
    sort_entries(&mut files);

    let elapsed = start.elapsed();
    info!(
        "Scanned '{}': {} directories, {} files, {} errors in {:.2}s",
        root.display(),
        dirs.len(),
        files.len(),
        errors.total(),
        elapsed.as_secs_f64()
    );

    Ok(ScanReport {
        root: root.to_path_buf(),
        dirs,
        files,
        errors,
        elapsed,
    })
}

/// Sizes one top-level entry. Returns `None` for sockets, FIFOs and devices.
fn size_entry<R: Reporter + ?Sized>(
    entry: &DirEntry,
    config: &ScanConfig,
    errors: &mut ErrorTally,
    reporter: &mut R,
) -> io::Result<Option<SizedEntry>> {
    let path = entry.path();
    let file_type = entry.file_type()?;

    let (size, kind) = if file_type.is_dir() {
        (compute_size(&path, config, errors, reporter), EntryKind::Dir)
    } else if file_type.is_file() {
        (entry.metadata()?.len(), EntryKind::File)
    } else if file_type.is_symlink() {
        let target = fs::read_link(&path)?;
        if path.is_dir() {
            let size = compute_size(&path, config, errors, reporter);
            (size, EntryKind::DirLink { target })
        } else {
            let size = fs::metadata(&path).map(|md| md.len()).unwrap_or(0);
            (size, EntryKind::FileLink { target })
        }
    } else {
        return Ok(None);
    };

    Ok(Some(SizedEntry { size, path, kind }))
}

fn record<R: Reporter + ?Sized>(
    config: &ScanConfig,
    errors: &mut ErrorTally,
    reporter: &mut R,
    err: &io::Error,
    message: String,
) {
    errors.record(ErrorKind::from_io(err));
    if config.show_warnings {
        reporter.warning(&message);
    }
}
