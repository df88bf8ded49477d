#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathtidy
//!
//! A library for cleaning Windows `PATH` values.
//!
//! Each `;`-separated entry is expanded (`%NAME%` references are resolved
//! recursively), checked for existence, rewritten into placeholder form for
//! display and deduplicated. The user and machine scopes are cleaned
//! independently.
//!
//! ## Core Types
//!
//! - [`PlaceholderRegistry`]: prefix-to-token mappings used for display
//! - [`PathListProcessor`] and [`ScopeReport`]: the cleaning pipeline and its output
//! - [`EnvironmentStore`]: where raw `PATH` values come from
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathtidy::path::expand::MapEnv;
//! use pathtidy::{EnvironmentStore, MemoryStore, Scope};
//!
//! let store = MemoryStore::new().with_value(Scope::User, "PATH", r"%APPDATA%\npm");
//! assert_eq!(store.read_path(Scope::User).unwrap(), r"%APPDATA%\npm");
//!
//! let env = MapEnv::new().with("APPDATA", r"C:\Users\me\AppData\Roaming");
//! let expanded = pathtidy::path::expand(r"%APPDATA%\npm", &env).unwrap();
//! assert_eq!(expanded, r"C:\Users\me\AppData\Roaming\npm");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod placeholder;
pub mod processor;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use placeholder::PlaceholderRegistry;
pub use processor::{Disposition, EntryOutcome, PathListProcessor, ScopeReport};
pub use store::registry::RegistryStore;
pub use store::snapshot::SnapshotStore;
pub use store::{EnvironmentStore, MemoryStore, Scope};
