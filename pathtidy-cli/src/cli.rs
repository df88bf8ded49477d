//! CLI structure and argument definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! Running `pathtidy` with no arguments cleans the user `PATH`, then the
//! machine `PATH`.

use crate::commands::CleanCommand;
use clap::Parser;
use std::path::PathBuf;

/// Report a cleaned, placeholder-normalized Windows PATH.
#[derive(Parser, Debug)]
#[command(name = "pathtidy")]
#[command(
    version,
    about = "Report a cleaned, placeholder-normalized Windows PATH",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output (lists every raw PATH entry)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.pathtidy/config.yaml
    #[arg(long, value_name = "FILE", global = true, env = "PATHTIDY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub clean: CleanCommand,
}
