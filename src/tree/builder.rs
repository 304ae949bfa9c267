//! Folding classified paths into a directory tree.
//!
//! # Overview
//!
//! Each path is split into segments and walked from the root. Every
//! directory on the way is found by name (or appended in discovery order) and
//! has its counters bumped; the final segment becomes a [`Leaf`].
//!
//! A node is a directory as soon as at least one segment remains below it,
//! so `a/f.txt` yields a directory `a` holding the file `f.txt`.
//!
//! Insertion validates before it mutates. A path that collides with what is
//! already in the tree is rejected with a [`TreeError`] and leaves the tree
//! untouched, so `size` always equals the number of files below a directory.
//!
//! # Example
//!
//! ```
//! use checksums2dups::duplicates::ClassifiedPath;
//! use checksums2dups::tree::{BuildOptions, TreeBuilder};
//!
//! let paths = vec![
//!     ClassifiedPath::new("a/b/f1.txt", true),
//!     ClassifiedPath::new("a/b/f2.txt", true),
//!     ClassifiedPath::new("a/c/f3.txt", false),
//! ];
//! let built = TreeBuilder::new(BuildOptions::default()).build(&paths);
//!
//! let root = built.tree.root();
//! let a = root.child("a").unwrap().as_directory().unwrap();
//! assert_eq!((a.size, a.dup_count), (3, 2));
//! assert!(built.skipped.is_empty());
//! ```

use thiserror::Error;

use super::node::{Directory, Leaf, TreeNode};
use super::path_utils::{join_node_path, split_segments_with};
use crate::duplicates::ClassifiedPath;
use crate::skip::{SkipReason, SkipReport};

/// Reasons a path cannot be inserted into the tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The path has no segments.
    #[error("path has no segments")]
    EmptyPath,

    /// A file sits where the path needs a directory.
    #[error("{path} is a file but the path continues below it")]
    FileInPath {
        /// Node path of the blocking file
        path: String,
    },

    /// The path names an existing directory.
    #[error("{path} is already a directory")]
    DirectoryExists {
        /// Node path of the existing directory
        path: String,
    },

    /// The path folds onto a file that is already in the tree.
    #[error("{path} was already inserted")]
    AliasedPath {
        /// Node path of the existing file
        path: String,
    },
}

impl TreeError {
    /// Skip reason recorded for this error.
    #[must_use]
    pub fn reason(&self) -> SkipReason {
        match self {
            Self::EmptyPath => SkipReason::EmptyPath,
            Self::FileInPath { .. } => SkipReason::FileInPath,
            Self::DirectoryExists { .. } => SkipReason::DirectoryExists,
            Self::AliasedPath { .. } => SkipReason::AliasedPath,
        }
    }
}

/// A directory tree rooted at the synthetic `root` directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirTree {
    root: Directory,
}

impl Default for DirTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DirTree {
    /// Create a tree holding only the root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Directory::root(),
        }
    }

    /// The root directory.
    #[must_use]
    pub fn root(&self) -> &Directory {
        &self.root
    }

    /// Number of files in the tree.
    #[must_use]
    pub fn file_count(&self) -> u64 {
        self.root.size
    }

    /// Number of duplicate files in the tree.
    #[must_use]
    pub fn duplicate_count(&self) -> u64 {
        self.root.dup_count
    }

    /// Check if the tree holds no nodes besides the root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Insert a file given as root-to-leaf segments.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] if the segments are empty or collide with
    /// existing nodes. The tree is unchanged in that case.
    pub fn insert(&mut self, segments: &[String], duped: bool) -> Result<(), TreeError> {
        let (name, parents) = segments.split_last().ok_or(TreeError::EmptyPath)?;
        self.check(parents, name)?;

        let mut dir = &mut self.root;
        dir.tally(duped);
        for segment in parents {
            dir = child_dir_mut(dir, segment)?;
            dir.tally(duped);
        }

        let path = join_node_path(&dir.path, name);
        dir.children
            .push(TreeNode::Leaf(Leaf::new(name.as_str(), path, duped)));
        Ok(())
    }

    /// Read-only walk that rejects paths colliding with existing nodes.
    fn check(&self, parents: &[String], name: &str) -> Result<(), TreeError> {
        let mut dir = &self.root;
        for segment in parents {
            match dir.child(segment) {
                None => return Ok(()),
                Some(TreeNode::Directory(next)) => dir = next,
                Some(TreeNode::Leaf(leaf)) => {
                    return Err(TreeError::FileInPath {
                        path: leaf.path.clone(),
                    })
                }
            }
        }

        match dir.child(name) {
            None => Ok(()),
            Some(TreeNode::Directory(existing)) => Err(TreeError::DirectoryExists {
                path: existing.path.clone(),
            }),
            Some(TreeNode::Leaf(existing)) => Err(TreeError::AliasedPath {
                path: existing.path.clone(),
            }),
        }
    }
}

/// Find the child directory `name`, appending it if absent.
fn child_dir_mut<'a>(dir: &'a mut Directory, name: &str) -> Result<&'a mut Directory, TreeError> {
    let idx = match dir.children.iter().position(|child| child.name() == name) {
        Some(idx) => idx,
        None => {
            let path = join_node_path(&dir.path, name);
            dir.children
                .push(TreeNode::Directory(Directory::new(name, path)));
            dir.children.len() - 1
        }
    };

    match &mut dir.children[idx] {
        TreeNode::Directory(child) => Ok(child),
        TreeNode::Leaf(leaf) => Err(TreeError::FileInPath {
            path: leaf.path.clone(),
        }),
    }
}

/// Options for [`TreeBuilder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Fold path segments to Unicode NFC before insertion.
    pub normalize_unicode: bool,
}

impl BuildOptions {
    /// Enable or disable NFC folding of path segments.
    #[must_use]
    pub fn with_normalize_unicode(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

/// A built tree plus the paths that could not be placed.
#[derive(Debug, Clone)]
pub struct BuiltTree {
    /// The directory tree
    pub tree: DirTree,
    /// Paths left out, by reason
    pub skipped: SkipReport,
}

/// Builds a [`DirTree`] from classified paths.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    options: BuildOptions,
}

impl TreeBuilder {
    /// Create a builder with the given options.
    #[must_use]
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Fold every path into a fresh tree.
    ///
    /// Paths that collide with earlier ones are skipped and counted; they
    /// never abort the build.
    #[must_use]
    pub fn build(&self, paths: &[ClassifiedPath]) -> BuiltTree {
        let mut tree = DirTree::new();
        let mut skipped = SkipReport::default();

        for entry in paths {
            let segments = split_segments_with(&entry.path, self.options.normalize_unicode);
            if let Err(err) = tree.insert(&segments, entry.duplicate) {
                log::debug!("Skipping path {:?}: {}", entry.path, err);
                skipped.record(err.reason());
            }
        }

        log::debug!(
            "Built tree with {} files ({} duplicates); {} paths skipped",
            tree.file_count(),
            tree.duplicate_count(),
            skipped.total()
        );
        BuiltTree { tree, skipped }
    }
}
