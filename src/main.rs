//! checksums2dups - directory duplicate counts from checksum manifests
//!
//! Entry point for the CLI application.

use checksums2dups::{
    cli::{usage, Cli},
    error::{ExitCode, ProcessError},
    logging::init_logging,
};
use clap::Parser;

fn main() {
    // Help and version exit 0; argument errors print usage and exit 2.
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match checksums2dups::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            let exit_code = match err.downcast_ref::<ProcessError>() {
                Some(process_err) => process_err.exit_code(),
                None => ExitCode::GeneralError,
            };

            eprintln!("[{}] Error: {}", exit_code.code_prefix(), err);
            if exit_code == ExitCode::InvalidInput {
                eprintln!("{}", usage());
            }

            std::process::exit(exit_code.as_i32());
        }
    }
}
