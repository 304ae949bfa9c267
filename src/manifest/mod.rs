//! Checksum manifest loading.
//!
//! A manifest is a text file with one `checksum<TAB>path` record per line.
//! Loading is best effort: malformed lines are counted and skipped, and only
//! failing to open or read the file is an error.

pub mod loader;

pub use loader::{parse_line, Manifest, ManifestError, ManifestLoader, Record};
