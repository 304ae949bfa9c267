//! Output formatters for directory trees.
//!
//! This module provides the two export formats:
//! - JSON with the full tree, for tools that want the structure
//! - CSV with one row per directory, for spreadsheet import
//!
//! # Example
//!
//! ```
//! use checksums2dups::manifest::ManifestLoader;
//! use checksums2dups::output::{CsvOutput, JsonOutput};
//!
//! let built = checksums2dups::build_tree(
//!     &ManifestLoader::new().parse_str("h1\ta/f1\nh1\ta/f2\n"),
//!     Default::default(),
//! );
//!
//! let json = JsonOutput::new(built.tree.root()).to_json_string().unwrap();
//! assert!(json.contains("\"dup_count\": 2"));
//!
//! let csv = CsvOutput::new(built.tree.root()).to_string().unwrap();
//! assert!(csv.starts_with("path,file_count,duplication_count"));
//! ```

pub mod csv;
pub mod json;

use std::path::PathBuf;

// Re-export main types
pub use self::csv::{CsvOutput, CsvOutputError};
pub use self::json::{parse_tree, JsonOutput, JsonOutputError};

/// Where each export format should be written. `None` disables the format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTargets {
    /// JSON output file
    pub json: Option<PathBuf>,
    /// CSV output file
    pub csv: Option<PathBuf>,
}

impl OutputTargets {
    /// Check if at least one format is selected.
    #[must_use]
    pub fn any(&self) -> bool {
        self.json.is_some() || self.csv.is_some()
    }
}
