//! Utility functions for the `rusize` tool.
//!
//! This module provides:
//! - Filesystem identity lookup via `libc::stat` ([`FileId`])
//! - Scan root resolution with `~` expansion
//! - Hidden-name detection
//! - Human-readable size formatting ([`format_size`])
//! - Size-ascending sorting of results
//!
//! The `stat` based helpers are Unix only, like the rest of the tool.

use crate::data::SizedEntry;
use libc::{stat as libc_stat, stat};
use std::ffi::{CString, OsStr};
use std::io;
use std::mem::MaybeUninit;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Unique identity of a filesystem object: device id plus inode number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileId {
    pub dev: u64,
    pub ino: u64,
}

impl FileId {
    /// Stats `path`, following symlinks, and returns its identity.
    ///
    /// # Errors
    /// Returns the OS error reported by `stat()`, or `InvalidInput` if the
    /// path contains an interior NUL byte.
    pub fn of(path: &Path) -> io::Result<Self> {
        let c_path = CString::new(path.as_os_str().as_bytes())
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

        // Use MaybeUninit to avoid undefined behavior with zeroed stat struct
        let mut stat_buf = MaybeUninit::<stat>::uninit();
        let result = unsafe { libc_stat(c_path.as_ptr(), stat_buf.as_mut_ptr()) };

        if result != 0 {
            return Err(io::Error::last_os_error());
        }

        let stat_buf = unsafe { stat_buf.assume_init() };
        Ok(FileId {
            dev: stat_buf.st_dev as u64,
            ino: stat_buf.st_ino as u64,
        })
    }
}

/// Returns `true` if a file name marks a hidden entry (leading `.`).
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_bytes().first() == Some(&b'.')
}

/// Expands a leading `~` and makes the scan root absolute.
///
/// Symlinks are resolved when the path exists. A path that cannot be
/// canonicalized is still made absolute so the banner and any error message
/// name the full location; the scan itself reports the failure.
pub fn resolve_root(path: &Path) -> PathBuf {
    let expanded = expand_home(path);
    expanded
        .canonicalize()
        .or_else(|_| std::path::absolute(&expanded))
        .unwrap_or(expanded)
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path.to_path_buf(),
    }
}

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Index of the MB unit. Sizes that would be shown in GB are shown here instead.
const MB_INDEX: usize = 2;

/// Converts a byte count into a human-readable string using 1024-based units.
///
/// # Behavior
/// * `0` is rendered as `"0B"`
/// * The largest unit not exceeding the size is picked from B to PB, except
///   that GB-sized values stay in MB (`"1,536.00 MB"`)
/// * MB values of 1000 or more keep two decimals and get thousands separators
/// * Everything else is rounded to two decimals with trailing zeros dropped,
///   keeping at least one (`"1.5 KB"`, `"100.0 B"`)
///
/// # Examples
/// ```
/// use rusize::utils::format_size;
///
/// assert_eq!(format_size(0), "0B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(1536 * 1024 * 1024), "1,536.00 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".to_string();
    }

    let mut index = 0;
    while index + 1 < UNITS.len() && bytes >= 1024u64.pow(index as u32 + 1) {
        index += 1;
    }
    if index == 3 {
        index = MB_INDEX;
    }

    let value = bytes as f64 / 1024f64.powi(index as i32);
    let fixed = format!("{value:.2}");
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    if index == MB_INDEX && whole.len() >= 4 {
        return format!("{}.{} {}", group_thousands(whole), fraction, UNITS[index]);
    }

    let fraction = fraction.trim_end_matches('0');
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    format!("{whole}.{fraction} {}", UNITS[index])
}

/// Inserts a `,` between every group of three digits.
pub fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Sorts entries by size, smallest first. Entries of equal size keep their
/// relative order.
pub fn sort_entries(entries: &mut [SizedEntry]) {
    entries.sort_by_key(|entry| entry.size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EntryKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_format_size_zero() {
        assert_eq!(format_size(0), "0B");
    }

    #[test]
    fn test_format_size_small_units() {
        assert_eq!(format_size(1), "1.0 B");
        assert_eq!(format_size(100), "100.0 B");
        assert_eq!(format_size(1023), "1023.0 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1280), "1.25 KB");
    }

    #[test]
    fn test_format_size_megabytes() {
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
        assert_eq!(format_size(999 * 1024 * 1024), "999.0 MB");
        assert_eq!(format_size(1000 * 1024 * 1024), "1,000.00 MB");
    }

    #[test]
    fn test_format_size_gigabytes_shown_as_megabytes() {
        let gib = 1024u64 * 1024 * 1024;
        assert_eq!(format_size(gib), "1,024.00 MB");
        assert_eq!(format_size(gib + gib / 2), "1,536.00 MB");
        assert_eq!(format_size(100 * gib), "102,400.00 MB");
    }

    #[test]
    fn test_format_size_large_units() {
        let tib = 1024u64.pow(4);
        assert_eq!(format_size(tib), "1.0 TB");
        assert_eq!(format_size(2 * tib + tib / 4), "2.25 TB");
        assert_eq!(format_size(1024u64.pow(5)), "1.0 PB");
        assert_eq!(format_size(2048 * 1024u64.pow(5)), "2048.0 PB");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(OsStr::new(".git")));
        assert!(is_hidden(OsStr::new(".")));
        assert!(!is_hidden(OsStr::new("src")));
        assert!(!is_hidden(OsStr::new("file.txt")));
    }

    #[test]
    fn test_file_id_same_object() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir = temp_dir.path().join("dir");
        fs::create_dir(&dir).expect("Failed to create dir");

        let first = FileId::of(&dir).expect("stat failed");
        let second = FileId::of(&dir.join("..").join("dir")).expect("stat failed");
        let parent = FileId::of(temp_dir.path()).expect("stat failed");

        assert_eq!(first, second);
        assert_ne!(first, parent);
    }

    #[test]
    fn test_file_id_missing_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let err = FileId::of(&temp_dir.path().join("missing")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_resolve_root_absolute() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let resolved = resolve_root(temp_dir.path());
        assert!(resolved.is_absolute());
        assert_eq!(
            resolved,
            temp_dir.path().canonicalize().expect("canonicalize failed")
        );

        let missing = resolve_root(Path::new("does/not/exist"));
        assert!(missing.is_absolute());
        assert!(missing.ends_with("does/not/exist"));
    }

    #[test]
    fn test_sort_entries_ascending_and_stable() {
        let entry = |name: &str, size| SizedEntry {
            size,
            path: PathBuf::from(name),
            kind: EntryKind::File,
        };
        let mut entries = vec![entry("c", 300), entry("a", 100), entry("b", 100)];

        sort_entries(&mut entries);

        let names: Vec<_> = entries
            .iter()
            .map(|e| e.path.to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
