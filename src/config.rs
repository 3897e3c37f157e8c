//! Run configuration: defaults, TOML file, CLI overrides
//!
//! Precedence, highest first: CLI flags, explicit `--config` file,
//! `goanno.toml` in the working directory, built-in defaults. The
//! configuration is resolved once at startup and immutable for the
//! run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Config file looked up in the working directory when `--config` is
/// not given
pub const DEFAULT_CONFIG_FILE: &str = "goanno.toml";

/// Resolved run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the model files to annotate
    pub root: PathBuf,

    /// Receiver type whose exported methods get doc comments
    pub receiver: String,

    /// Filename suffix selecting candidate files
    pub suffix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("server/model/modelcore"),
            receiver: "ModelCore".to_string(),
            suffix: ".go".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    ///
    /// With `no_config`, or when no explicit path is given and no
    /// `goanno.toml` exists, the defaults are returned. An explicit
    /// path that cannot be read is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or is not
    /// valid TOML.
    pub fn load(explicit: Option<&Path>, no_config: bool) -> Result<Self> {
        if no_config {
            return Ok(Self::default());
        }

        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.root, PathBuf::from("server/model/modelcore"));
        assert_eq!(config.receiver, "ModelCore");
        assert_eq!(config.suffix, ".go");
    }

    #[test]
    fn test_no_config_returns_defaults() {
        let config = Config::load(None, true).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(&path, "root = \"models\"\nreceiver = \"Repository\"\n").unwrap();

        let config = Config::load(Some(&path), false).unwrap();
        assert_eq!(config.root, PathBuf::from("models"));
        assert_eq!(config.receiver, "Repository");
        // Unspecified fields keep their defaults
        assert_eq!(config.suffix, ".go");
    }

    #[test]
    fn test_explicit_file_missing_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.toml");
        assert!(Config::load(Some(&path), false).is_err());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.toml");
        fs::write(&path, "root = [not toml").unwrap();
        assert!(Config::load(Some(&path), false).is_err());
    }

    #[test]
    fn test_unknown_field_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("extra.toml");
        fs::write(&path, "receivr = \"Typo\"\n").unwrap();
        assert!(Config::load(Some(&path), false).is_err());
    }
}
