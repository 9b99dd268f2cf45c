//! Configuration file support for psirt-annotate.
//!
//! Provides YAML-based configuration through `psirt-annotate.config.yml`
//! files, including data structures, file loading, validation and the
//! resolved [`Settings`] a run is executed with.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::advisory_scan::domain::OsType;
use crate::advisory_scan::services::RateLimitPolicy;
use crate::application::dto::DEFAULT_VERSION_COLUMN;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "psirt-annotate.config.yml";

/// Spreadsheet annotated when neither the CLI nor the config names one
pub const DEFAULT_SPREADSHEET: &str = "Baseline_albr_extract.csv";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub spreadsheet: Option<String>,
    pub output: Option<String>,
    pub version_column: Option<String>,
    pub os_types: Option<Vec<String>>,
    pub max_requests_per_second: Option<usize>,
    pub max_requests_per_minute: Option<usize>,
    pub continue_on_error: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parses `os_types` into device families, keeping the configured order
    pub fn parsed_os_types(&self) -> Result<Option<Vec<OsType>>> {
        match &self.os_types {
            None => Ok(None),
            Some(list) => {
                let joined = list.join(",");
                let parsed = OsType::parse_list(&joined)
                    .map_err(|e| anyhow::anyhow!("Invalid config: os_types: {}", e))?;
                Ok(Some(parsed))
            }
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.parsed_os_types()?;

    for (key, value) in [
        ("max_requests_per_second", config.max_requests_per_second),
        ("max_requests_per_minute", config.max_requests_per_minute),
    ] {
        if value == Some(0) {
            bail!(
                "Invalid config: {} must be at least 1.\n\n\
                 💡 Hint: Remove the key to use the openVuln default limits.",
                key
            );
        }
    }

    if let Some(column) = &config.version_column {
        if column.trim().is_empty() {
            bail!("Invalid config: version_column must not be empty.");
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Fully resolved settings for one run (CLI > config file > defaults)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub spreadsheet: PathBuf,
    pub output: Option<PathBuf>,
    pub version_column: String,
    pub os_types: Vec<OsType>,
    pub rate_limit: RateLimitPolicy,
    pub continue_on_error: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spreadsheet: PathBuf::from(DEFAULT_SPREADSHEET),
            output: None,
            version_column: DEFAULT_VERSION_COLUMN.to_string(),
            os_types: OsType::DEFAULT_ORDER.to_vec(),
            rate_limit: RateLimitPolicy::default(),
            continue_on_error: false,
        }
    }
}

impl Settings {
    /// Applies the values present in a config file on top of the defaults
    pub fn from_config(config: Option<&ConfigFile>) -> Result<Self> {
        let mut settings = Self::default();
        let Some(config) = config else {
            return Ok(settings);
        };

        if let Some(spreadsheet) = &config.spreadsheet {
            settings.spreadsheet = PathBuf::from(spreadsheet);
        }
        if let Some(output) = &config.output {
            settings.output = Some(PathBuf::from(output));
        }
        if let Some(column) = &config.version_column {
            settings.version_column = column.trim().to_string();
        }
        if let Some(os_types) = config.parsed_os_types()? {
            settings.os_types = os_types;
        }
        if let Some(per_second) = config.max_requests_per_second {
            settings.rate_limit.max_per_second = per_second;
        }
        if let Some(per_minute) = config.max_requests_per_minute {
            settings.rate_limit.max_per_minute = per_minute;
        }
        if let Some(continue_on_error) = config.continue_on_error {
            settings.continue_on_error = continue_on_error;
        }
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
spreadsheet: inventory/baseline.csv
version_column: sw_version
os_types:
  - ios
  - iosxe
max_requests_per_second: 2
max_requests_per_minute: 20
continue_on_error: true
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.spreadsheet.as_deref(), Some("inventory/baseline.csv"));
        assert_eq!(config.version_column.as_deref(), Some("sw_version"));
        assert_eq!(
            config.parsed_os_types().unwrap(),
            Some(vec![OsType::Ios, OsType::Iosxe])
        );
        assert_eq!(config.max_requests_per_second, Some(2));
        assert_eq!(config.continue_on_error, Some(true));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "continue_on_error: false\n").unwrap();

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.continue_on_error, Some(false));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(format!("{}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_os_type_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "os_types: [ios, junos]\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("junos"));
    }

    #[test]
    fn test_zero_rate_limit_rejected() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "max_requests_per_minute: 0\n").unwrap();

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(format!("{}", err).contains("max_requests_per_minute must be at least 1"));
    }

    #[test]
    fn test_unknown_fields_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "spreadsheet: a.csv\nformat: xlsx\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("format"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_config(None).unwrap();
        assert_eq!(settings.spreadsheet, PathBuf::from(DEFAULT_SPREADSHEET));
        assert_eq!(settings.version_column, "software_version");
        assert_eq!(settings.os_types, OsType::DEFAULT_ORDER.to_vec());
        assert_eq!(settings.rate_limit, RateLimitPolicy::new(5, 30));
        assert!(!settings.continue_on_error);
        assert!(settings.output.is_none());
    }

    #[test]
    fn test_settings_from_config() {
        let config = ConfigFile {
            spreadsheet: Some("inv.csv".to_string()),
            os_types: Some(vec!["nxos".to_string()]),
            max_requests_per_minute: Some(10),
            ..ConfigFile::default()
        };

        let settings = Settings::from_config(Some(&config)).unwrap();
        assert_eq!(settings.spreadsheet, PathBuf::from("inv.csv"));
        assert_eq!(settings.os_types, vec![OsType::Nxos]);
        assert_eq!(settings.rate_limit, RateLimitPolicy::new(5, 10));
    }
}
