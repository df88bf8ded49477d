//! Configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective [`Config`] from files, environment and overrides.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder with default sources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load this file instead of `~/.pathtidy/config.yaml`.
    ///
    /// Unlike the default location, an explicit file must exist.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply `PATHTIDY_*` environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Programmatic overrides, applied last.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an override cannot be
    /// parsed, or the merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let file_config = match self.config_file {
                Some(ref path) => Some(ConfigLoader::load_file(path)?),
                None => ConfigLoader::load_user_config()?,
            };
            if let Some(ref file_config) = file_config {
                config.merge_from(file_config);
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            config.merge_from(overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::MAX_DEPTH_ENV;
    use serial_test::serial;
    use std::{env, fs};
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let result = ConfigBuilder::new()
            .with_config_file(Path::new("/nonexistent/pathtidy.yaml"))
            .skip_env()
            .build();
        assert!(result.unwrap_err().is_configuration_error());
    }

    #[test]
    fn test_explicit_file_then_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "variables: [APPDATA]\nmax_expansion_depth: 4\n").unwrap();

        let config = ConfigBuilder::new()
            .with_config_file(&path)
            .skip_env()
            .with_config(Config {
                max_expansion_depth: Some(9),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.variable_names(), vec!["APPDATA"]);
        assert_eq!(config.max_expansion_depth(), 9);
    }

    #[test]
    fn test_invalid_merged_config_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                variables: Some(vec![String::new()]),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_env_beats_file() {
        let saved = env::var(MAX_DEPTH_ENV).ok();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "max_expansion_depth: 4\n").unwrap();

        env::set_var(MAX_DEPTH_ENV, "12");
        let config = ConfigBuilder::new().with_config_file(&path).build().unwrap();
        assert_eq!(config.max_expansion_depth(), 12);

        match saved {
            Some(val) => env::set_var(MAX_DEPTH_ENV, val),
            None => env::remove_var(MAX_DEPTH_ENV),
        }
    }
}
