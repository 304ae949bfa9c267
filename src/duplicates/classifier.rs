//! Duplicate classification of grouped paths.
//!
//! Turns [`ChecksumGroups`] into one [`ClassifiedPath`] per unique path. A
//! path is a duplicate when its checksum group holds two or more records.
//!
//! The result is ordered duplicates first. Tree counts do not depend on this
//! order; it only decides which children are discovered first.

use std::collections::HashMap;

use super::groups::ChecksumGroups;

/// A unique manifest path with its duplicate flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPath {
    /// Path as written in the manifest
    pub path: String,
    /// True when the path's checksum is shared by two or more records
    pub duplicate: bool,
}

impl ClassifiedPath {
    /// Create a classified path.
    #[must_use]
    pub fn new(path: impl Into<String>, duplicate: bool) -> Self {
        Self {
            path: path.into(),
            duplicate,
        }
    }
}

/// Flag every path in `groups` and order the result duplicates first.
///
/// A path listed under several checksums keeps the position where it was
/// first seen and takes the flag of the last group that lists it.
///
/// # Example
///
/// ```
/// use checksums2dups::duplicates::{classify, ChecksumGroups};
///
/// let mut groups = ChecksumGroups::new();
/// groups.insert("h2", "a/c/f3.txt");
/// groups.insert("h1", "a/b/f1.txt");
/// groups.insert("h1", "a/b/f2.txt");
///
/// let classified = classify(&groups);
/// assert_eq!(classified[0].path, "a/b/f1.txt");
/// assert!(classified[0].duplicate);
/// assert_eq!(classified[2].path, "a/c/f3.txt");
/// assert!(!classified[2].duplicate);
/// ```
#[must_use]
pub fn classify(groups: &ChecksumGroups) -> Vec<ClassifiedPath> {
    let mut classified: Vec<ClassifiedPath> = Vec::with_capacity(groups.record_count());
    let mut position: HashMap<&str, usize> = HashMap::new();

    for (checksum, paths) in groups.iter() {
        let duplicate = paths.len() > 1;
        if duplicate {
            log::trace!("checksum {} shared by {} paths", checksum, paths.len());
        }
        for path in paths {
            match position.get(path.as_str()) {
                Some(&idx) => classified[idx].duplicate = duplicate,
                None => {
                    position.insert(path.as_str(), classified.len());
                    classified.push(ClassifiedPath::new(path.as_str(), duplicate));
                }
            }
        }
    }

    // Stable: insertion order survives within each class.
    classified.sort_by_key(|entry| std::cmp::Reverse(entry.duplicate));
    classified
}
