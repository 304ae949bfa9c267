//! checksums2dups - directory duplicate counts from checksum manifests
//!
//! Reads tab-delimited `checksum<TAB>path` manifests, flags every path whose
//! checksum is shared by another record, folds the paths into a directory
//! tree with per-directory file and duplicate counts, and exports the tree as
//! JSON and/or CSV.
//!
//! # Example
//!
//! ```
//! use checksums2dups::manifest::ManifestLoader;
//! use checksums2dups::tree::BuildOptions;
//!
//! let manifest = ManifestLoader::new()
//!     .parse_str("h1\ta/b/f1.txt\nh1\ta/b/f2.txt\nh2\ta/c/f3.txt\n");
//! let built = checksums2dups::build_tree(&manifest, BuildOptions::default());
//!
//! assert_eq!(built.tree.file_count(), 3);
//! assert_eq!(built.tree.duplicate_count(), 2);
//! ```

pub mod cli;
pub mod config;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod skip;
pub mod tree;

use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::config::Config;
use crate::duplicates::classify;
use crate::error::{ExitCode, ProcessError};
use crate::manifest::{Manifest, ManifestLoader};
use crate::output::{CsvOutput, JsonOutput, OutputTargets};
use crate::skip::SkipReport;
use crate::tree::{BuildOptions, BuiltTree, TreeBuilder};

/// Classify a loaded manifest and fold it into a tree.
///
/// The returned skip report covers both dropped manifest lines and paths the
/// tree could not place.
#[must_use]
pub fn build_tree(manifest: &Manifest, options: BuildOptions) -> BuiltTree {
    let classified = classify(&manifest.groups);
    let mut built = TreeBuilder::new(options).build(&classified);
    built.skipped.merge(&manifest.skipped);
    built
}

/// Settings for processing a single manifest.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Output files to write
    pub targets: OutputTargets,
    /// Tree building options
    pub build: BuildOptions,
    /// JSON indentation width
    pub json_indent: usize,
    /// Suppress progress messages on stdout
    pub quiet: bool,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            targets: OutputTargets::default(),
            build: BuildOptions::default(),
            json_indent: output::json::DEFAULT_INDENT,
            quiet: false,
        }
    }
}

impl ProcessOptions {
    /// Combine CLI flags with loaded configuration.
    #[must_use]
    pub fn from_cli(cli: &Cli, config: &Config) -> Self {
        Self {
            targets: cli.targets(),
            build: BuildOptions::default().with_normalize_unicode(config.normalize_unicode),
            json_indent: config.json_indent,
            quiet: cli.quiet,
        }
    }

    fn progress(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }
}

/// What one manifest produced.
#[derive(Debug, Clone)]
pub struct ManifestReport {
    /// Files placed in the tree
    pub files: u64,
    /// Duplicate files placed in the tree
    pub duplicates: u64,
    /// Checksums shared by two or more records
    pub duplicate_groups: usize,
    /// Directories in the tree, root included
    pub directories: usize,
    /// Lines and paths left out
    pub skipped: SkipReport,
}

/// Load, build and export one manifest.
///
/// # Errors
///
/// Fails if the manifest cannot be read or an output file cannot be written.
/// Outputs written before the failure are left in place.
pub fn process_manifest(path: &Path, options: &ProcessOptions) -> Result<ManifestReport> {
    options.progress("Building tree...");
    let manifest = ManifestLoader::new().load(path)?;
    let built = build_tree(&manifest, options.build);
    let root = built.tree.root();

    if !options.targets.any() {
        log::warn!("{}: no output selected; tree is built but not exported", path.display());
    }

    if let Some(json_path) = &options.targets.json {
        options.progress(&format!("Exporting JSON to {}", json_path.display()));
        JsonOutput::new(root)
            .with_indent(options.json_indent)
            .write_file(json_path)
            .with_context(|| format!("failed to write JSON to {}", json_path.display()))?;
    }

    if let Some(csv_path) = &options.targets.csv {
        options.progress(&format!("Exporting CSV to {}", csv_path.display()));
        CsvOutput::new(root)
            .write_file(csv_path)
            .with_context(|| format!("failed to write CSV to {}", csv_path.display()))?;
    }

    let report = ManifestReport {
        files: built.tree.file_count(),
        duplicates: built.tree.duplicate_count(),
        duplicate_groups: manifest.groups.duplicate_groups().count(),
        directories: root.directories().count(),
        skipped: built.skipped,
    };
    log::info!(
        "{}: {} files, {} duplicates in {} groups, {} directories",
        path.display(),
        report.files,
        report.duplicates,
        report.duplicate_groups,
        report.directories
    );
    if !report.skipped.is_empty() {
        log::debug!("{}: skipped {}", path.display(), report.skipped);
    }
    Ok(report)
}

/// Run the application for parsed CLI arguments.
///
/// Manifests are processed in order. Without `--keep-going` the first
/// failure stops the run.
///
/// # Errors
///
/// Returns a [`ProcessError`] for a manifest that is not a file or fails to
/// process, and a configuration error if settings cannot be loaded.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    let options = ProcessOptions::from_cli(&cli, &config);
    let keep_going = cli.keep_going || config.keep_going;

    if cli.manifests.is_empty() {
        log::warn!("No manifests given; nothing to do");
        return Ok(ExitCode::Success);
    }

    let mut failures = 0;
    for manifest in &cli.manifests {
        let result = if manifest.is_file() {
            process_manifest(manifest, &options)
                .map(|_| ())
                .map_err(|source| ProcessError::Failed {
                    path: manifest.clone(),
                    source,
                })
        } else {
            Err(ProcessError::NotAFile(manifest.clone()))
        };

        if let Err(err) = result {
            if !keep_going {
                return Err(err.into());
            }
            log::error!("{err}");
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(ProcessError::Incomplete(failures).into());
    }
    Ok(ExitCode::Success)
}
