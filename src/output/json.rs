//! JSON output formatter for directory trees.
//!
//! Writes the whole tree, directories and files, as UTF-8 JSON with keys in
//! alphabetical order and four-space indentation by default.
//!
//! # Output Schema
//!
//! ```json
//! {
//!     "children": [
//!         {
//!             "children": [
//!                 {
//!                     "duped": true,
//!                     "name": "f1.txt",
//!                     "path": "/a/f1.txt"
//!                 }
//!             ],
//!             "dup_count": 1,
//!             "name": "a",
//!             "path": "/a",
//!             "size": 1
//!         }
//!     ],
//!     "dup_count": 1,
//!     "name": "root",
//!     "path": "",
//!     "size": 1
//! }
//! ```
//!
//! An empty tree is written without counters:
//! `{"children": [], "name": "root", "path": ""}`.

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::tree::Directory;

/// Indentation used unless configured otherwise.
pub const DEFAULT_INDENT: usize = 4;

/// Errors that can occur during JSON output or decoding.
#[derive(Debug, Error)]
pub enum JsonOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during JSON serialization or parsing.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON output formatter.
#[derive(Debug, Clone, Copy)]
pub struct JsonOutput<'a> {
    root: &'a Directory,
    indent: usize,
}

impl<'a> JsonOutput<'a> {
    /// Create a JSON formatter for the tree under `root`.
    #[must_use]
    pub fn new(root: &'a Directory) -> Self {
        Self {
            root,
            indent: DEFAULT_INDENT,
        }
    }

    /// Set the number of spaces per indentation level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Write the JSON document to the given writer.
    ///
    /// # Errors
    ///
    /// Returns `JsonOutputError` if writing or serialization fails.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), JsonOutputError> {
        let indent = vec![b' '; self.indent];
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.root.serialize(&mut serializer)?;
        Ok(())
    }

    /// Create (or truncate) `path` and write the JSON document to it.
    ///
    /// # Errors
    ///
    /// Returns `JsonOutputError` if the file cannot be created or written.
    /// A partially written file is left in place.
    pub fn write_file(&self, path: &Path) -> Result<(), JsonOutputError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Generate the JSON document as a string.
    ///
    /// # Errors
    ///
    /// Returns `JsonOutputError` if serialization fails.
    pub fn to_json_string(&self) -> Result<String, JsonOutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Decode a tree previously written by [`JsonOutput`].
///
/// # Errors
///
/// Returns `JsonOutputError` if the input is not a valid tree document.
pub fn parse_tree<R: Read>(reader: R) -> Result<Directory, JsonOutputError> {
    Ok(serde_json::from_reader(reader)?)
}
