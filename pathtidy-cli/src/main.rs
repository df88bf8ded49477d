//! Main entry point for the pathtidy CLI.
//!
//! Reads the user and machine `PATH` values, drops entries that no longer
//! exist and duplicates, and prints the cleaned lists with common prefixes
//! replaced by placeholders such as `%PF64%\`.

use clap::Parser;
use pathtidy_cli::utils::GlobalOptions;
use pathtidy_cli::{Cli, CliError};

fn main() {
    // Parse CLI arguments; help and version exit normally
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(CliError::from(e).exit_code());
        }
    };

    // Initialize logging based on verbosity
    let logger = pathtidy::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Handle errors and set exit code
    match cli.clean.execute(&global, &logger) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            logger.error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
