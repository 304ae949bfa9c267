//! Path segmentation and node path joining.
//!
//! Manifest paths are split into root-to-leaf segments with
//! [`std::path::Path::components`], so the platform separator rules apply:
//!
//! - An absolute path starts with its root marker as a segment (`/` on Unix,
//!   `C:\` on Windows).
//! - Repeated and trailing separators collapse; interior `.` components drop.
//! - A leading `.` and any `..` stay as ordinary segments.
//!
//! Segments can optionally be normalized to NFC so that the same visual name
//! in composed and decomposed form lands in the same directory.
//!
//! # Example
//!
//! ```
//! use checksums2dups::tree::path_utils::split_segments;
//!
//! assert_eq!(split_segments("a/b/f1.txt"), vec!["a", "b", "f1.txt"]);
//! assert_eq!(split_segments("./a//b/"), vec![".", "a", "b"]);
//! ```

use std::borrow::Cow;
use std::path::{Component, Path, MAIN_SEPARATOR};

use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Split `path` into root-to-leaf segments.
#[must_use]
pub fn split_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut prefix: Option<String> = None;

    for component in Path::new(path).components() {
        match component {
            Component::Prefix(p) => {
                prefix = Some(p.as_os_str().to_string_lossy().into_owned());
            }
            Component::RootDir => {
                let mut root = prefix.take().unwrap_or_default();
                root.push(MAIN_SEPARATOR);
                segments.push(root);
            }
            other => {
                if let Some(p) = prefix.take() {
                    segments.push(p);
                }
                segments.push(other.as_os_str().to_string_lossy().into_owned());
            }
        }
    }

    // A bare drive prefix such as `C:`.
    if let Some(p) = prefix {
        segments.push(p);
    }

    segments
}

/// Split `path` into segments, folding each one to NFC when `normalize` is set.
#[must_use]
pub fn split_segments_with(path: &str, normalize: bool) -> Vec<String> {
    let segments = split_segments(path);
    if !normalize {
        return segments;
    }
    segments
        .into_iter()
        .map(|segment| match normalize_segment(&segment) {
            Cow::Borrowed(_) => segment,
            Cow::Owned(normalized) => normalized,
        })
        .collect()
}

/// Normalize a segment to NFC, borrowing when it is already composed.
#[must_use]
pub fn normalize_segment(segment: &str) -> Cow<'_, str> {
    if is_nfc(segment) {
        Cow::Borrowed(segment)
    } else {
        Cow::Owned(segment.nfc().collect())
    }
}

/// Build the path of a child node: `parent + separator + name`.
///
/// The root's path is empty, so a top-level node `a` gets the path `/a`
/// on Unix.
#[must_use]
pub fn join_node_path(parent: &str, name: &str) -> String {
    let mut path = String::with_capacity(parent.len() + name.len() + 1);
    path.push_str(parent);
    path.push(MAIN_SEPARATOR);
    path.push_str(name);
    path
}
