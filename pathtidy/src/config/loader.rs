//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Name of the per-user data directory under the home directory.
pub const DATA_DIR_NAME: &str = ".pathtidy";

/// Name of the configuration file inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use pathtidy::config::ConfigLoader;
///
/// let config = ConfigLoader::load_user_config().unwrap();
/// println!("{:?}", config.map(|c| c.variable_names()));
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `~/.pathtidy/config.yaml` if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, or the
    /// file exists but cannot be read or parsed.
    pub fn load_user_config() -> Result<Option<Config>> {
        let path = Self::user_config_path()?;
        if !path.exists() {
            log::debug!("no user config at {}", path.display());
            return Ok(None);
        }
        Self::load_file(&path).map(Some)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Path of the per-user configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::Validation {
            field: "home".into(),
            message: "Cannot determine home directory".into(),
        })?;
        Ok(home.join(DATA_DIR_NAME).join(CONFIG_FILE_NAME))
    }
}
