//! Configuration system for pathtidy.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from the following sources (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHTIDY_VARIABLES`, `PATHTIDY_MAX_EXPANSION_DEPTH`)
//! 3. The config file (`--config`, or `~/.pathtidy/config.yaml` if present)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use pathtidy::config::{Config, ConfigBuilder};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         variables: Some(vec!["APPDATA".to_string()]),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.variable_names(), vec!["APPDATA".to_string()]);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::ConfigLoader;
pub use schema::{Config, PlaceholderSeed};
pub use validator::ConfigValidator;
