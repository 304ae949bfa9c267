//! CSV output formatter for directory trees.
//!
//! Flattens the tree into one row per directory, visited pre-order with
//! children in discovery order. Files are never written as rows.
//!
//! # Columns
//!
//! - `path`: Node path of the directory (empty for the root)
//! - `file_count`: Files below the directory
//! - `duplication_count`: Duplicate files below the directory
//!
//! The header is always written, so an empty tree produces the header only.
//!
//! # Example
//!
//! ```
//! use checksums2dups::output::csv::CsvOutput;
//! use checksums2dups::tree::Directory;
//!
//! let root = Directory::root();
//! let csv = CsvOutput::new(&root).to_string().unwrap();
//! assert_eq!(csv, "path,file_count,duplication_count\n");
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::tree::Directory;

/// Header row written before any data.
pub const HEADER: [&str; 3] = ["path", "file_count", "duplication_count"];

/// Errors that can occur during CSV output generation.
#[derive(Debug, Error)]
pub enum CsvOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// A single row in the CSV output.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    path: &'a str,
    file_count: u64,
    duplication_count: u64,
}

/// CSV output formatter.
#[derive(Debug, Clone, Copy)]
pub struct CsvOutput<'a> {
    root: &'a Directory,
}

impl<'a> CsvOutput<'a> {
    /// Create a CSV formatter for the tree under `root`.
    #[must_use]
    pub fn new(root: &'a Directory) -> Self {
        Self { root }
    }

    /// Write the CSV output to the given writer.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if writing or serialization fails.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), CsvOutputError> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        csv_writer.write_record(HEADER)?;

        // An empty root has nothing to report.
        for dir in self.root.directories().filter(|dir| dir.size > 0) {
            csv_writer.serialize(CsvRow {
                path: &dir.path,
                file_count: dir.size,
                duplication_count: dir.dup_count,
            })?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Create (or truncate) `path` and write the CSV output to it.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if the file cannot be created or written.
    /// A partially written file is left in place.
    pub fn write_file(&self, path: &Path) -> Result<(), CsvOutputError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Generate CSV output as a string.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if serialization fails.
    pub fn to_string(&self) -> Result<String, CsvOutputError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
