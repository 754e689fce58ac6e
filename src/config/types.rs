//! Configuration types for a shift calculator session.
//!
//! These structures are deserialized from the session YAML file.

use std::num::NonZeroUsize;

use serde::Deserialize;

use crate::error::{EngineError, EngineResult};
use crate::models::{Shift, ShiftCatalog};

/// Ledger settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LedgerSettings {
    /// Maximum number of undo snapshots kept. Absent means unbounded.
    #[serde(default)]
    pub history_limit: Option<NonZeroUsize>,
}

/// Calculator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalculatorSettings {
    /// Whether a keypad calculator is bound to the ledger total.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for CalculatorSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
        }
    }
}

/// Behavioral settings for a session.
///
/// The default is an unbounded undo history with a bound calculator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionSettings {
    /// Ledger settings.
    #[serde(default)]
    pub ledger: LedgerSettings,
    /// Calculator settings.
    #[serde(default)]
    pub calculator: CalculatorSettings,
}

impl SessionSettings {
    /// Returns settings with the given undo history limit.
    pub fn with_history_limit(mut self, limit: NonZeroUsize) -> Self {
        self.ledger.history_limit = Some(limit);
        self
    }

    /// Returns settings with the calculator disabled.
    pub fn without_calculator(mut self) -> Self {
        self.calculator.enabled = false;
        self
    }
}

/// Ledger section as written in the session file, before range checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct LedgerSection {
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl LedgerSection {
    fn into_settings(self) -> EngineResult<LedgerSettings> {
        let history_limit = match self.history_limit {
            None => None,
            Some(limit) => Some(NonZeroUsize::new(limit).ok_or_else(|| {
                EngineError::InvalidConfig {
                    field: "ledger.history_limit".to_string(),
                    message: "must be greater than zero".to_string(),
                }
            })?),
        };
        Ok(LedgerSettings { history_limit })
    }
}

/// Layout of the session YAML file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SessionFile {
    #[serde(default)]
    pub ledger: LedgerSection,
    #[serde(default)]
    pub calculator: CalculatorSettings,
    pub shifts: Vec<Shift>,
}

impl SessionFile {
    /// Splits the file into its checked settings and raw shift definitions.
    pub fn into_parts(self) -> EngineResult<(SessionSettings, Vec<Shift>)> {
        let settings = SessionSettings {
            ledger: self.ledger.into_settings()?,
            calculator: self.calculator,
        };
        Ok((settings, self.shifts))
    }
}

/// A validated catalog together with its settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    settings: SessionSettings,
    catalog: ShiftCatalog,
}

impl SessionConfig {
    /// Creates a configuration from settings and a catalog.
    pub fn new(settings: SessionSettings, catalog: ShiftCatalog) -> Self {
        Self { settings, catalog }
    }

    /// Returns the session settings.
    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Returns the shift catalog.
    pub fn catalog(&self) -> &ShiftCatalog {
        &self.catalog
    }

    /// Splits the configuration into its settings and catalog.
    pub fn into_parts(self) -> (SessionSettings, ShiftCatalog) {
        (self.settings, self.catalog)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            settings: SessionSettings::default(),
            catalog: ShiftCatalog::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = SessionSettings::default();
        assert_eq!(settings.ledger.history_limit, None);
        assert!(settings.calculator.enabled);
    }

    #[test]
    fn test_builder_methods() {
        let settings = SessionSettings::default()
            .with_history_limit(NonZeroUsize::new(10).unwrap())
            .without_calculator();
        assert_eq!(settings.ledger.history_limit, NonZeroUsize::new(10));
        assert!(!settings.calculator.enabled);
    }

    #[test]
    fn test_zero_history_limit_in_file_is_invalid() {
        let yaml = "ledger:\n  history_limit: 0\nshifts: []\n";
        let file: SessionFile = serde_yaml::from_str(yaml).unwrap();
        match file.into_parts() {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "ledger.history_limit");
            }
            other => panic!("Expected InvalidConfig error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_history_limit_does_not_deserialize_into_settings() {
        let result: Result<SessionSettings, _> =
            serde_yaml::from_str("ledger:\n  history_limit: 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_sections_are_optional() {
        let settings: SessionSettings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, SessionSettings::default());

        let settings: SessionSettings =
            serde_yaml::from_str("calculator: {}\nledger:\n  history_limit: 5\n").unwrap();
        assert!(settings.calculator.enabled);
        assert_eq!(settings.ledger.history_limit, NonZeroUsize::new(5));
    }

    #[test]
    fn test_session_file_layout() {
        let yaml = r#"
ledger:
  history_limit: 50
calculator:
  enabled: false
shifts:
  - { id: m, code: M, hours: 6, start_time: 7am, end_time: 1pm }
"#;
        let file: SessionFile = serde_yaml::from_str(yaml).unwrap();
        let (settings, shifts) = file.into_parts().unwrap();
        assert_eq!(settings.ledger.history_limit, NonZeroUsize::new(50));
        assert!(!settings.calculator.enabled);
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].code, "M");
    }
}
