//! Skip accounting for manifest lines and tree paths.
//!
//! Malformed manifest lines and paths that cannot be folded into the tree
//! never abort processing. Each one is recorded here under a [`SkipReason`]
//! so callers and tests can see how much input was dropped and why.
//!
//! # Example
//!
//! ```
//! use checksums2dups::skip::{SkipReason, SkipReport};
//!
//! let mut report = SkipReport::default();
//! report.record(SkipReason::MissingSeparator);
//! report.record(SkipReason::MissingSeparator);
//! report.record(SkipReason::FileInPath);
//!
//! assert_eq!(report.count(SkipReason::MissingSeparator), 2);
//! assert_eq!(report.lines(), 2);
//! assert_eq!(report.paths(), 1);
//! assert_eq!(report.total(), 3);
//! ```

use std::collections::BTreeMap;
use std::fmt;

/// Why a manifest line or a path was left out of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipReason {
    /// Line was empty after trimming.
    BlankLine,
    /// Line has no tab between checksum and path.
    MissingSeparator,
    /// Checksum field is empty.
    EmptyChecksum,
    /// Path field is empty, or the path has no segments.
    EmptyPath,
    /// A file already occupies a segment that must be a directory.
    FileInPath,
    /// The final segment already exists as a directory.
    DirectoryExists,
    /// Another spelling of the same path was already inserted.
    AliasedPath,
}

impl SkipReason {
    /// Whether this reason applies to a manifest line rather than a tree path.
    #[must_use]
    pub fn is_line_level(self) -> bool {
        matches!(
            self,
            Self::BlankLine | Self::MissingSeparator | Self::EmptyChecksum | Self::EmptyPath
        )
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::BlankLine => "blank line",
            Self::MissingSeparator => "missing tab separator",
            Self::EmptyChecksum => "empty checksum",
            Self::EmptyPath => "empty path",
            Self::FileInPath => "file where a directory is expected",
            Self::DirectoryExists => "directory already exists at path",
            Self::AliasedPath => "path already inserted under another spelling",
        };
        f.write_str(text)
    }
}

/// Counts of skipped items, keyed by reason.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipReport {
    counts: BTreeMap<SkipReason, usize>,
}

impl SkipReport {
    /// Record one skipped item.
    pub fn record(&mut self, reason: SkipReason) {
        *self.counts.entry(reason).or_insert(0) += 1;
    }

    /// Number of items skipped for `reason`.
    #[must_use]
    pub fn count(&self, reason: SkipReason) -> usize {
        self.counts.get(&reason).copied().unwrap_or(0)
    }

    /// Total skipped items across all reasons.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Skipped manifest lines.
    #[must_use]
    pub fn lines(&self) -> usize {
        self.iter()
            .filter(|(reason, _)| reason.is_line_level())
            .map(|(_, n)| n)
            .sum()
    }

    /// Skipped tree paths.
    #[must_use]
    pub fn paths(&self) -> usize {
        self.iter()
            .filter(|(reason, _)| !reason.is_line_level())
            .map(|(_, n)| n)
            .sum()
    }

    /// True when nothing was skipped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: &SkipReport) {
        for (reason, n) in &other.counts {
            *self.counts.entry(*reason).or_insert(0) += n;
        }
    }

    /// Iterate over `(reason, count)` pairs in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (SkipReason, usize)> + '_ {
        self.counts.iter().map(|(reason, n)| (*reason, *n))
    }
}

impl fmt::Display for SkipReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("nothing skipped");
        }
        let parts: Vec<String> = self
            .iter()
            .map(|(reason, n)| format!("{n} x {reason}"))
            .collect();
        f.write_str(&parts.join(", "))
    }
}
