//! Library exports for pathtidy-cli.
//!
//! This module exports the CLI structure for use by the binary and by
//! tooling that generates man pages and other documentation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
pub use error::CliError;
