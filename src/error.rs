//! Structured error handling and exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the checksums2dups application.
///
/// - 0: Success (every manifest processed)
/// - 1: General error (configuration could not be loaded)
/// - 2: Invalid input (bad arguments, missing manifest, processing failure)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success: all manifests were processed and exported.
    Success = 0,
    /// General error: an unexpected failure outside manifest processing.
    GeneralError = 1,
    /// Invalid input: a manifest could not be processed or arguments were wrong.
    InvalidInput = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "CD000",
            Self::GeneralError => "CD001",
            Self::InvalidInput => "CD002",
        }
    }
}

/// Failure processing one manifest argument.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The argument does not name a regular file.
    #[error("Could not process {}; it isn't a file.", .0.display())]
    NotAFile(PathBuf),

    /// Loading, building or exporting failed.
    #[error("Could not process {}; {source:#}", path.display())]
    Failed {
        /// Manifest being processed
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: anyhow::Error,
    },

    /// One or more manifests failed while `--keep-going` was active.
    #[error("{0} manifest(s) could not be processed")]
    Incomplete(usize),
}

impl ProcessError {
    /// Exit code this failure maps to.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::InvalidInput
    }
}
