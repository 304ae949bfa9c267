//! Tree node types.
//!
//! A tree is a [`Directory`] named `root` with an empty path. Directories carry
//! the number of files below them (`size`) and how many of those are duplicates
//! (`dup_count`). Files are [`Leaf`] nodes carrying only their `duped` flag.
//!
//! # Serialized form
//!
//! Fields are declared in alphabetical order so serialized keys come out
//! sorted. A directory is recognized by its `children` key and a leaf by its
//! `duped` key:
//!
//! ```json
//! {
//!     "children": [
//!         {
//!             "duped": true,
//!             "name": "f1.txt",
//!             "path": "/a/f1.txt"
//!         }
//!     ],
//!     "dup_count": 1,
//!     "name": "a",
//!     "path": "/a",
//!     "size": 1
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Name of the synthetic root directory.
pub const ROOT_NAME: &str = "root";

/// A directory or file in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Directory with children and counters
    Directory(Directory),
    /// File with its duplicate flag
    Leaf(Leaf),
}

impl TreeNode {
    /// Node name (last path segment).
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Directory(dir) => &dir.name,
            Self::Leaf(leaf) => &leaf.name,
        }
    }

    /// Full node path from the root.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Directory(dir) => &dir.path,
            Self::Leaf(leaf) => &leaf.path,
        }
    }

    /// The directory, if this node is one.
    #[must_use]
    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            Self::Directory(dir) => Some(dir),
            Self::Leaf(_) => None,
        }
    }

    /// The leaf, if this node is one.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Self::Directory(_) => None,
            Self::Leaf(leaf) => Some(leaf),
        }
    }
}

/// A directory node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    /// Child nodes in discovery order
    pub children: Vec<TreeNode>,
    /// Number of duplicate files below this directory
    #[serde(default, skip_serializing_if = "is_zero")]
    pub dup_count: u64,
    /// Directory name
    pub name: String,
    /// Full path from the root
    pub path: String,
    /// Number of files below this directory
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: u64,
}

/// A file node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaf {
    /// True when the file's checksum is shared by two or more records
    pub duped: bool,
    /// File name
    pub name: String,
    /// Full path from the root
    pub path: String,
}

// Only the root of an empty tree has zero counters.
fn is_zero(n: &u64) -> bool {
    *n == 0
}

impl Directory {
    /// Create an empty directory.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            children: Vec::new(),
            dup_count: 0,
            name: name.into(),
            path: path.into(),
            size: 0,
        }
    }

    /// Create the synthetic root directory.
    #[must_use]
    pub fn root() -> Self {
        Self::new(ROOT_NAME, "")
    }

    /// Count one file below this directory.
    pub(crate) fn tally(&mut self, duped: bool) {
        self.size += 1;
        if duped {
            self.dup_count += 1;
        }
    }

    /// Direct child named `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.iter().find(|child| child.name() == name)
    }

    /// Iterate over this directory and every directory below it, pre-order.
    ///
    /// Children are visited in discovery order. The walk uses an explicit
    /// stack, so depth is bounded only by memory.
    #[must_use]
    pub fn directories(&self) -> Directories<'_> {
        Directories { stack: vec![self] }
    }

    /// Iterate over every file below this directory.
    pub fn leaves(&self) -> impl Iterator<Item = &Leaf> {
        self.directories()
            .flat_map(|dir| dir.children.iter().filter_map(TreeNode::as_leaf))
    }

    /// Find a directory by its full node path.
    #[must_use]
    pub fn find_directory(&self, path: &str) -> Option<&Directory> {
        self.directories().find(|dir| dir.path == path)
    }

    /// Find a file by its full node path.
    #[must_use]
    pub fn find_leaf(&self, path: &str) -> Option<&Leaf> {
        self.leaves().find(|leaf| leaf.path == path)
    }
}

/// Pre-order directory iterator returned by [`Directory::directories`].
#[derive(Debug)]
pub struct Directories<'a> {
    stack: Vec<&'a Directory>,
}

impl<'a> Iterator for Directories<'a> {
    type Item = &'a Directory;

    fn next(&mut self) -> Option<Self::Item> {
        let dir = self.stack.pop()?;
        self.stack.extend(
            dir.children
                .iter()
                .rev()
                .filter_map(TreeNode::as_directory),
        );
        Some(dir)
    }
}

impl Leaf {
    /// Create a file node.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>, duped: bool) -> Self {
        Self {
            duped,
            name: name.into(),
            path: path.into(),
        }
    }
}
