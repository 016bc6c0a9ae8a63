//! Data structures for representing scan results.
//!
//! This module defines the records produced by a scan: one [`SizedEntry`] per
//! top-level entry of the scan root, and the [`ErrorTally`] that counts every
//! entry which could not be read along the way.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

/// A top-level entry of the scan root together with its total size.
///
/// # Fields
/// * `size` - Total apparent size in bytes
/// * `path` - Full path of the entry
/// * `kind` - What the entry is, used for the label column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedEntry {
    pub size: u64,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// The type of a top-level entry.
///
/// Symlinks remember the target they point to, as read from the link itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    File,
    DirLink { target: PathBuf },
    FileLink { target: PathBuf },
}

impl EntryKind {
    /// Returns the label printed next to the size.
    ///
    /// # Returns
    /// * `"[DIR]"` / `"[FILE]"` for plain entries
    /// * `"[DIR-LINK→target]"` / `"[FILE-LINK→target]"` for symlinks
    pub fn label(&self) -> String {
        match self {
            EntryKind::Dir => "[DIR]".to_string(),
            EntryKind::File => "[FILE]".to_string(),
            EntryKind::DirLink { target } => format!("[DIR-LINK→{}]", target.display()),
            EntryKind::FileLink { target } => format!("[FILE-LINK→{}]", target.display()),
        }
    }

    /// Short name used in CSV output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Dir => "DIR",
            EntryKind::File => "FILE",
            EntryKind::DirLink { .. } => "DIR-LINK",
            EntryKind::FileLink { .. } => "FILE-LINK",
        }
    }

    /// Returns `true` for entries listed in the directories table.
    pub fn is_dir(&self) -> bool {
        matches!(self, EntryKind::Dir | EntryKind::DirLink { .. })
    }
}

/// Category of a non-fatal error met while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    PermissionDenied,
    NotFound,
    OtherOs,
}

impl ErrorKind {
    /// Classifies an I/O error.
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            _ => ErrorKind::OtherOs,
        }
    }

    /// Classifies a traversal error. Errors without an underlying I/O error
    /// (symlink loops) count as generic OS errors.
    pub fn from_walk(err: &walkdir::Error) -> Self {
        err.io_error().map_or(ErrorKind::OtherOs, ErrorKind::from_io)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::OtherOs => "OtherOSError",
        }
    }
}

/// Number of errors seen per [`ErrorKind`] over a whole scan.
///
/// One tally is shared by every top-level entry and is never reset mid-run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTally {
    counts: BTreeMap<ErrorKind, u64>,
}

impl ErrorTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: ErrorKind) {
        *self.counts.entry(kind).or_insert(0) += 1;
    }

    pub fn count(&self, kind: ErrorKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterates over the kinds that occurred, in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (ErrorKind, u64)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_kind_labels() {
        assert_eq!(EntryKind::Dir.label(), "[DIR]");
        assert_eq!(EntryKind::File.label(), "[FILE]");
        let link = EntryKind::DirLink {
            target: PathBuf::from("../shared"),
        };
        assert_eq!(link.label(), "[DIR-LINK→../shared]");
        let link = EntryKind::FileLink {
            target: PathBuf::from("notes.txt"),
        };
        assert_eq!(link.label(), "[FILE-LINK→notes.txt]");
    }

    #[test]
    fn test_entry_kind_is_dir() {
        assert!(EntryKind::Dir.is_dir());
        assert!(
            EntryKind::DirLink {
                target: PathBuf::from("x")
            }
            .is_dir()
        );
        assert!(!EntryKind::File.is_dir());
        assert!(
            !EntryKind::FileLink {
                target: PathBuf::from("x")
            }
            .is_dir()
        );
    }

    #[test]
    fn test_error_kind_from_io() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let missing = io::Error::from(io::ErrorKind::NotFound);
        let other = io::Error::other("device went away");
        assert_eq!(ErrorKind::from_io(&denied), ErrorKind::PermissionDenied);
        assert_eq!(ErrorKind::from_io(&missing), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_io(&other), ErrorKind::OtherOs);
        assert_eq!(ErrorKind::OtherOs.as_str(), "OtherOSError");
    }

    #[test]
    fn test_error_tally_counts() {
        let mut tally = ErrorTally::new();
        assert!(tally.is_empty());

        tally.record(ErrorKind::NotFound);
        tally.record(ErrorKind::PermissionDenied);
        tally.record(ErrorKind::PermissionDenied);

        assert_eq!(tally.count(ErrorKind::PermissionDenied), 2);
        assert_eq!(tally.count(ErrorKind::NotFound), 1);
        assert_eq!(tally.count(ErrorKind::OtherOs), 0);
        assert_eq!(tally.total(), 3);

        let kinds: Vec<_> = tally.iter().map(|(kind, _)| kind).collect();
        assert_eq!(kinds, vec![ErrorKind::PermissionDenied, ErrorKind::NotFound]);
    }
}
