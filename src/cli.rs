//! Command-line interface definitions.
//!
//! # Example
//!
//! ```bash
//! # Directory counts as CSV
//! checksums2dups -c dups.csv manifest.tab
//!
//! # Both formats, several manifests, debug logging
//! checksums2dups -v -c dups.csv -j tree.json first.tab second.tab
//! ```

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::output::OutputTargets;

/// Creates a list of directories with duplicated file counts from
/// tab-delimited checksum manifests.
///
/// Each manifest line is `checksum<TAB>path`. Every directory gets the number
/// of files below it and how many of those share their checksum with another
/// record.
#[derive(Debug, Parser)]
#[command(name = "checksums2dups")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("outputs")
        .args(["csv", "json"])
        .required(true)
        .multiple(true)
))]
#[command(after_help = "At least one output (CSV or JSON) must be selected.\n\n\
Example: checksums2dups -c dups.csv manifest.tab\n\
Takes the \"manifest.tab\" checksum manifest and creates a dup CSV list in \"dups.csv\".")]
pub struct Cli {
    /// Write per-directory counts as CSV to this file
    #[arg(short, long, value_name = "OUTPUT_CSV")]
    pub csv: Option<PathBuf>,

    /// Write the full tree as JSON to this file
    #[arg(short, long, value_name = "OUTPUT_JSON")]
    pub json: Option<PathBuf>,

    /// Checksum manifests to process, each independently
    #[arg(value_name = "MANIFEST")]
    pub manifests: Vec<PathBuf>,

    /// Keep processing remaining manifests after one fails
    #[arg(long)]
    pub keep_going: bool,

    /// Read settings from this TOML file instead of the default location
    #[arg(long, value_name = "FILE", env = "CHECKSUMS2DUPS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress messages and all logging except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// The selected output files.
    #[must_use]
    pub fn targets(&self) -> OutputTargets {
        OutputTargets {
            json: self.json.clone(),
            csv: self.csv.clone(),
        }
    }
}

/// Full usage block, output note and example included, printed after input
/// errors.
#[must_use]
pub fn usage() -> String {
    use clap::CommandFactory;
    Cli::command().render_help().to_string()
}
