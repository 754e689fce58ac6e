//! Shift model.
//!
//! A shift is a catalog entry: a short code, an hour value, and display-only
//! start and end labels. The labels are never parsed, so overnight shifts
//! such as `8pm - 8am` need no wraparound handling.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a predefined shift that can be added to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// Short display label (e.g., "M1", "N2").
    pub code: String,
    /// Number of hours credited when the shift is selected.
    pub hours: Decimal,
    /// Display-only start label (e.g., "8am").
    pub start_time: String,
    /// Display-only end label (e.g., "2pm").
    pub end_time: String,
}

impl Shift {
    /// Creates a new shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_calc::models::Shift;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift::new("n1", "N1", Decimal::new(12, 0), "8pm", "8am");
    /// assert_eq!(shift.code, "N1");
    /// assert_eq!(shift.hours, Decimal::new(12, 0));
    /// ```
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        hours: Decimal,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            hours,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }

    /// Returns the `"<start> - <end>"` label shown under the shift code.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_calc::models::Shift;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift::new("a1", "A1", Decimal::new(6, 0), "2pm", "8pm");
    /// assert_eq!(shift.time_range(), "2pm - 8pm");
    /// ```
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }

    /// Checks the invariants a catalog entry must satisfy.
    pub(crate) fn validate(&self) -> EngineResult<()> {
        if self.id.trim().is_empty() {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: "id must not be empty".to_string(),
            });
        }
        if self.code.trim().is_empty() {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: "code must not be empty".to_string(),
            });
        }
        if self.hours.is_sign_negative() && !self.hours.is_zero() {
            return Err(EngineError::InvalidShift {
                shift_id: self.id.clone(),
                message: format!("hours must not be negative, got {}", self.hours),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_time_range_for_overnight_shift_is_verbatim() {
        let shift = Shift::new("n3", "N3", Decimal::new(12, 0), "7pm", "7am");
        assert_eq!(shift.time_range(), "7pm - 7am");
    }

    #[test]
    fn test_validate_accepts_zero_hours() {
        let shift = Shift::new("off", "OFF", Decimal::ZERO, "-", "-");
        assert!(shift.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_fractional_hours() {
        let shift = Shift::new("h", "H", Decimal::from_str("7.5").unwrap(), "9am", "4:30pm");
        assert!(shift.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_hours() {
        let shift = Shift::new("bad", "B", Decimal::new(-3, 0), "9am", "6am");
        match shift.validate() {
            Err(EngineError::InvalidShift { shift_id, message }) => {
                assert_eq!(shift_id, "bad");
                assert!(message.contains("negative"));
            }
            other => panic!("Expected InvalidShift error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_code() {
        let shift = Shift::new("blank", "  ", Decimal::new(6, 0), "7am", "1pm");
        assert!(matches!(
            shift.validate(),
            Err(EngineError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let shift = Shift::new("", "M", Decimal::new(6, 0), "7am", "1pm");
        assert!(matches!(
            shift.validate(),
            Err(EngineError::InvalidShift { .. })
        ));
    }

    #[test]
    fn test_shift_deserialization() {
        let json = r#"{
            "id": "m2",
            "code": "M2",
            "hours": "7",
            "start_time": "8am",
            "end_time": "3pm"
        }"#;

        let shift: Shift = serde_json::from_str(json).unwrap();
        assert_eq!(shift.id, "m2");
        assert_eq!(shift.hours, Decimal::new(7, 0));
        assert_eq!(shift.time_range(), "8am - 3pm");
    }

    #[test]
    fn test_shift_deserialization_from_yaml_number() {
        let yaml = "id: l1\ncode: L1\nhours: 12\nstart_time: 8am\nend_time: 8pm\n";
        let shift: Shift = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(shift.hours, Decimal::new(12, 0));
        assert_eq!(shift.start_time, "8am");
    }
}
