//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a session
//! configuration from YAML.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftCatalog;

use super::types::{SessionConfig, SessionFile, SessionSettings};

/// Name of the session file inside a configuration directory.
pub const SESSION_FILE: &str = "session.yaml";

/// Loads and provides access to a session configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── session.yaml   # Shift catalog plus ledger and calculator settings
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_calc::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let night = loader.catalog().find_by_code("N1").unwrap();
/// println!("{} is {} hours", night.code, night.hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SessionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `session.yaml` is missing
    /// - The file contains invalid YAML or is missing required fields
    /// - A shift is invalid or two shifts share an id
    /// - A setting is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let file_path = path.as_ref().join(SESSION_FILE);
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text.
    ///
    /// `source` names the origin of the text in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calc::config::ConfigLoader;
    ///
    /// let yaml = "shifts:\n  - { id: d, code: D, hours: 9, start_time: 8am, end_time: 5pm }\n";
    /// let loader = ConfigLoader::from_yaml_str(yaml, "inline")?;
    /// assert_eq!(loader.catalog().len(), 1);
    /// assert!(loader.settings().calculator.enabled);
    /// # Ok::<(), shift_calc::error::EngineError>(())
    /// ```
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        let file: SessionFile =
            serde_yaml::from_str(content).map_err(|e| EngineError::CatalogParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let (settings, shifts) = file.into_parts()?;
        let catalog = ShiftCatalog::new(shifts)?;
        let config = SessionConfig::new(settings, catalog);

        info!(
            source = %source,
            shifts = config.catalog().len(),
            history_limit = ?config.settings().ledger.history_limit,
            calculator = config.settings().calculator.enabled,
            "Loaded session configuration"
        );

        Ok(Self { config })
    }

    /// Returns the underlying session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the shift catalog.
    pub fn catalog(&self) -> &ShiftCatalog {
        self.config.catalog()
    }

    /// Returns the session settings.
    pub fn settings(&self) -> &SessionSettings {
        self.config.settings()
    }

    /// Consumes the loader, returning the session configuration.
    pub fn into_config(self) -> SessionConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/default"
    }

    #[test]
    fn test_load_default_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.catalog().len(), 20);
        assert_eq!(loader.settings().ledger.history_limit, None);
        assert!(loader.settings().calculator.enabled);
    }

    #[test]
    fn test_default_file_matches_builtin_catalog() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.catalog(), &ShiftCatalog::standard());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::CatalogNotFound { path }) => {
                assert!(path.contains("session.yaml"));
            }
            _ => panic!("Expected CatalogNotFound error"),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("shifts: [ {", "broken.yaml");

        match result {
            Err(EngineError::CatalogParseError { path, .. }) => {
                assert_eq!(path, "broken.yaml");
            }
            _ => panic!("Expected CatalogParseError error"),
        }
    }

    #[test]
    fn test_missing_shifts_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("ledger:\n  history_limit: 3\n", "no_shifts");
        match result {
            Err(EngineError::CatalogParseError { message, .. }) => {
                assert!(message.contains("shifts"), "unexpected message: {}", message);
            }
            _ => panic!("Expected CatalogParseError error"),
        }
    }

    #[test]
    fn test_duplicate_shift_ids_rejected() {
        let yaml = r#"
shifts:
  - { id: m, code: M, hours: 6, start_time: 7am, end_time: 1pm }
  - { id: m, code: M, hours: 7, start_time: 7am, end_time: 2pm }
"#;
        assert!(matches!(
            ConfigLoader::from_yaml_str(yaml, "dup"),
            Err(EngineError::DuplicateShift { .. })
        ));
    }

    #[test]
    fn test_negative_hours_rejected() {
        let yaml = "shifts:\n  - { id: x, code: X, hours: -2, start_time: 1am, end_time: 3am }\n";
        assert!(matches!(
            ConfigLoader::from_yaml_str(yaml, "negative"),
            Err(EngineError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_zero_history_limit_rejected() {
        let yaml = "ledger:\n  history_limit: 0\nshifts: []\n";
        assert!(matches!(
            ConfigLoader::from_yaml_str(yaml, "limit"),
            Err(EngineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_fractional_hours_loaded() {
        let yaml = r#"
calculator:
  enabled: false
shifts:
  - { id: h, code: H, hours: "7.5", start_time: 9am, end_time: "4:30pm" }
"#;
        let loader = ConfigLoader::from_yaml_str(yaml, "fractional").unwrap();
        assert_eq!(
            loader.catalog().find_by_code("H").unwrap().hours,
            Decimal::new(75, 1)
        );
        assert!(!loader.settings().calculator.enabled);
    }
}
