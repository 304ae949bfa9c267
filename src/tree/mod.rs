//! Directory tree built from manifest paths.
//!
//! - [`path_utils`]: splitting paths into segments and joining node paths
//! - [`node`]: directory and file node types
//! - [`builder`]: folding classified paths into a [`DirTree`]

pub mod builder;
pub mod node;
pub mod path_utils;

pub use builder::{BuildOptions, BuiltTree, DirTree, TreeBuilder, TreeError};
pub use node::{Directory, Leaf, TreeNode, ROOT_NAME};
