//! Application settings and paths.
//!
//! Reads `settings.json` from the XDG configuration directory.

use crate::cli::OutputFormat;
use crate::error::{ConfigError, ConfigResult};
use crate::types::Timeout;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/ipcheck)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the configuration directory.
    pub fn new() -> ConfigResult<Self> {
        let project =
            ProjectDirs::from("com", "ipcheck", "ipcheck").ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Default probe timeout in seconds (1-10).
    pub default_timeout_secs: u64,
    /// Maximum probes in flight during a bulk check.
    pub concurrency: usize,
    /// Default output format.
    pub default_output_format: OutputFormat,
    /// File name used by `--export` when no path is given.
    pub export_file_name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_timeout_secs: Timeout::default().as_secs(),
            concurrency: 8,
            default_output_format: OutputFormat::Plain,
            export_file_name: "ip_check_results.csv".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load() -> ConfigResult<Self> {
        let file = Paths::new()?.settings_file();

        if !file.exists() {
            debug!(path = %file.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// The default timeout, validated.
    pub fn timeout(&self) -> ConfigResult<Timeout> {
        Ok(Timeout::try_from(self.default_timeout_secs)?)
    }

    fn validate(&self) -> ConfigResult<()> {
        self.timeout()?;
        if self.concurrency == 0 {
            return Err(ConfigError::InvalidFormat(
                "concurrency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.default_timeout_secs, 3);
        assert_eq!(settings.export_file_name, "ip_check_results.csv");
        assert_eq!(settings.timeout().unwrap(), Timeout::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_timeout_secs": 5, "default_output_format": "csv"}}"#).unwrap();

        let settings = AppSettings::load_from(file.path()).unwrap();
        assert_eq!(settings.timeout().unwrap().as_secs(), 5);
        assert_eq!(settings.default_output_format, OutputFormat::Csv);
        assert_eq!(settings.concurrency, 8);
    }

    #[test]
    fn test_out_of_range_timeout_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_timeout_secs": 60}}"#).unwrap();

        let result = AppSettings::load_from(file.path());
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(_))));
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = AppSettings::load_from(file.path());
        assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppSettings::load_from(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::ReadFailed { .. })));
    }
}
