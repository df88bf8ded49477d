//! CLI command implementations.
//!
//! pathtidy has a single command, `clean`, which runs when the binary is
//! invoked.

pub mod clean;

pub use clean::CleanCommand;
