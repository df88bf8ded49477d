//! Build script for pathtidy-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this synchronized with src/cli.rs and src/commands/clean.rs.
fn build_cli() -> Command {
    Command::new("pathtidy")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Report a cleaned, placeholder-normalized Windows PATH")
        .long_about(
            "Reads the user and machine PATH values, drops entries that no longer exist \
             and duplicates, and prints each cleaned list with common prefixes replaced \
             by placeholders such as %PF64%\\",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output (lists every raw PATH entry)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ~/.pathtidy/config.yaml")
                .value_name("FILE")
                .env("PATHTIDY_CONFIG"),
        )
        .arg(
            Arg::new("scope")
                .long("scope")
                .help("Which PATH to clean")
                .value_parser(["user", "machine", "all"])
                .default_value("all"),
        )
        .arg(
            Arg::new("snapshot")
                .long("snapshot")
                .help("Read PATH values from a YAML snapshot instead of the registry")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathtidy.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
