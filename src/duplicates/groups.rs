//! Checksum grouping of manifest paths.
//!
//! # Overview
//!
//! Every manifest record contributes its path to the group of its checksum.
//! A group with two or more paths means those paths hold identical content.
//!
//! Groups iterate in the order their checksum was first seen, and paths
//! inside a group keep insertion order, so a manifest always folds into the
//! same tree.
//!
//! # Example
//!
//! ```
//! use checksums2dups::duplicates::ChecksumGroups;
//!
//! let mut groups = ChecksumGroups::new();
//! groups.insert("h1", "a/b/f1.txt");
//! groups.insert("h1", "a/b/f2.txt");
//! groups.insert("h2", "a/c/f3.txt");
//!
//! assert_eq!(groups.len(), 2);
//! assert_eq!(groups.record_count(), 3);
//! assert_eq!(groups.duplicate_groups().count(), 1);
//! ```

use std::collections::HashMap;

/// Paths grouped by checksum, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecksumGroups {
    groups: Vec<(String, Vec<String>)>,
    index: HashMap<String, usize>,
}

impl ChecksumGroups {
    /// Create an empty set of groups.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the group for `checksum`, creating the group if needed.
    pub fn insert(&mut self, checksum: impl Into<String>, path: impl Into<String>) {
        let checksum = checksum.into();
        let path = path.into();
        match self.index.get(&checksum) {
            Some(&idx) => self.groups[idx].1.push(path),
            None => {
                self.index.insert(checksum.clone(), self.groups.len());
                self.groups.push((checksum, vec![path]));
            }
        }
    }

    /// Paths recorded under `checksum`.
    #[must_use]
    pub fn get(&self, checksum: &str) -> Option<&[String]> {
        self.index
            .get(checksum)
            .map(|&idx| self.groups[idx].1.as_slice())
    }

    /// Number of distinct checksums.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if no records were grouped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|(_, paths)| paths.len()).sum()
    }

    /// Iterate over `(checksum, paths)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(checksum, paths)| (checksum.as_str(), paths.as_slice()))
    }

    /// Iterate over groups holding two or more paths.
    pub fn duplicate_groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter().filter(|(_, paths)| paths.len() > 1)
    }
}
