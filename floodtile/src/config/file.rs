//! Configuration file handling.
//!
//! Loads user configuration with sensible defaults. Settings structs live
//! in [`super::settings`], constants in [`super::defaults`], and parsing
//! in [`super::parser`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::Config;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl Config {
    /// Load configuration from the default path (`floodtile.ini` in the
    /// working directory).
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }
}

/// Get the default path to the config file.
pub fn config_file_path() -> PathBuf {
    PathBuf::from("floodtile.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_ini(name: &str, contents: &str) -> PathBuf {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let path = std::env::temp_dir().join(format!("floodtile_cfg_{}_{}", timestamp, name));
        fs::write(&path, contents).expect("write temp config");
        path
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/floodtile.ini")).unwrap();
        assert_eq!(config.server.port, 3002);
        assert_eq!(config.data.source, "data/flood_zones.geojson");
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_ini("load.ini", "[server]\nport = 9000\n");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.port, 9000);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_invalid_value_error_mentions_key() {
        let path = temp_ini("bad.ini", "[tile]\nsize = huge\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("tile.size"));
        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_default_config_path() {
        assert_eq!(config_file_path(), PathBuf::from("floodtile.ini"));
    }
}
