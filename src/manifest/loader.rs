//! Manifest reader and line parser.
//!
//! # Line format
//!
//! ```text
//! checksum<TAB>path[<TAB>ignored]
//! ```
//!
//! Lines end in `\n`, `\r\n` or a lone `\r`. Surrounding whitespace is
//! trimmed before splitting. Only the first two tab-separated fields are used;
//! anything after a second tab is ignored.
//!
//! # Example
//!
//! ```
//! use checksums2dups::manifest::ManifestLoader;
//!
//! let manifest = ManifestLoader::new().parse_str("h1\ta/f1\nh1\ta/f2\nno-tab-here\n");
//! assert_eq!(manifest.records, 2);
//! assert_eq!(manifest.skipped.total(), 1);
//! assert_eq!(manifest.groups.get("h1").unwrap().len(), 2);
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::duplicates::ChecksumGroups;
use crate::skip::{SkipReason, SkipReport};

/// Errors that can occur while loading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest could not be opened or read.
    #[error("failed to read manifest {}: {source}", path.display())]
    Read {
        /// Manifest path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// One parsed manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Content checksum, compared as an opaque string
    pub checksum: String,
    /// File path as written in the manifest
    pub path: String,
}

/// Result of loading a manifest.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// Paths grouped by checksum
    pub groups: ChecksumGroups,
    /// Number of lines that produced a record
    pub records: usize,
    /// Lines that were dropped, by reason
    pub skipped: SkipReport,
}

/// Parse a single manifest line.
///
/// # Errors
///
/// Returns the [`SkipReason`] for a line that does not hold a usable record.
///
/// # Example
///
/// ```
/// use checksums2dups::manifest::parse_line;
/// use checksums2dups::skip::SkipReason;
///
/// let record = parse_line("abc123\tdocs/a.txt\textra\n").unwrap();
/// assert_eq!(record.checksum, "abc123");
/// assert_eq!(record.path, "docs/a.txt");
///
/// assert_eq!(parse_line("no separator"), Err(SkipReason::MissingSeparator));
/// ```
pub fn parse_line(line: &str) -> Result<Record, SkipReason> {
    let line = line.trim();
    if line.is_empty() {
        return Err(SkipReason::BlankLine);
    }

    let mut fields = line.splitn(3, '\t');
    let checksum = fields.next().unwrap_or_default();
    let path = fields.next().ok_or(SkipReason::MissingSeparator)?;

    if checksum.is_empty() {
        return Err(SkipReason::EmptyChecksum);
    }
    if path.is_empty() {
        return Err(SkipReason::EmptyPath);
    }

    Ok(Record {
        checksum: checksum.to_string(),
        path: path.to_string(),
    })
}

/// Split `text` into lines ending in `\n`, `\r\n` or a lone `\r`.
///
/// Like [`str::lines`], a final line ending does not produce an empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                let line = &rest[..end];
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Loads manifests into checksum groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestLoader;

impl ManifestLoader {
    /// Create a loader.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Read and parse the manifest at `path`.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Read`] if the file cannot be opened or read.
    pub fn load(&self, path: &Path) -> Result<Manifest, ManifestError> {
        let bytes = fs::read(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let manifest = self.parse_str(&text);
        log::debug!(
            "Loaded {} records ({} checksums) from {}; skipped: {}",
            manifest.records,
            manifest.groups.len(),
            path.display(),
            manifest.skipped
        );
        Ok(manifest)
    }

    /// Parse manifest text that is already in memory.
    #[must_use]
    pub fn parse_str(&self, text: &str) -> Manifest {
        let mut manifest = Manifest::default();
        for (idx, line) in split_lines(text).enumerate() {
            match parse_line(line) {
                Ok(record) => {
                    manifest.groups.insert(record.checksum, record.path);
                    manifest.records += 1;
                }
                Err(reason) => {
                    log::trace!("Skipping manifest line {}: {}", idx + 1, reason);
                    manifest.skipped.record(reason);
                }
            }
        }
        manifest
    }
}
