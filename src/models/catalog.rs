//! The fixed catalog of selectable shifts.

use std::collections::HashSet;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::Shift;

/// The ordered, immutable set of shifts offered by the button grid.
///
/// Entries are validated once at construction and shared as `Arc<Shift>` so
/// that selections and undo snapshots only hold references.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftCatalog {
    shifts: Vec<Arc<Shift>>,
}

impl ShiftCatalog {
    /// Builds a catalog from shift definitions, preserving their order.
    ///
    /// # Returns
    ///
    /// Returns an error if:
    /// - Any shift has an empty id or code, or negative hours
    /// - Two shifts share the same id
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calc::models::{Shift, ShiftCatalog};
    /// use rust_decimal::Decimal;
    ///
    /// let catalog = ShiftCatalog::new(vec![
    ///     Shift::new("m", "M", Decimal::new(6, 0), "7am", "1pm"),
    ///     Shift::new("n1", "N1", Decimal::new(12, 0), "8pm", "8am"),
    /// ])?;
    /// assert_eq!(catalog.len(), 2);
    /// # Ok::<(), shift_calc::error::EngineError>(())
    /// ```
    pub fn new(shifts: Vec<Shift>) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        for shift in &shifts {
            shift.validate()?;
            if !seen.insert(shift.id.as_str()) {
                return Err(EngineError::DuplicateShift {
                    shift_id: shift.id.clone(),
                });
            }
        }

        Ok(Self {
            shifts: shifts.into_iter().map(Arc::new).collect(),
        })
    }

    /// Returns the built-in twenty-code catalog.
    pub fn standard() -> Self {
        let entries: [(&str, &str, i64, &str, &str); 20] = [
            ("m", "M", 6, "7am", "1pm"),
            ("m1", "M1", 6, "8am", "2pm"),
            ("m2", "M2", 7, "8am", "3pm"),
            ("m3", "M3", 6, "9am", "3pm"),
            ("m4", "M4", 7, "9am", "4pm"),
            ("m5", "M5", 8, "8am", "4pm"),
            ("m6", "M6", 7, "7am", "2pm"),
            ("a1", "A1", 6, "2pm", "8pm"),
            ("a2", "A2", 6, "3pm", "9pm"),
            ("x1", "X1", 9, "8am", "5pm"),
            ("x2", "X2", 9, "9am", "6pm"),
            ("x3", "X3", 9, "7am", "4pm"),
            ("x4", "X4", 9, "11am", "8pm"),
            ("l1", "L1", 12, "8am", "8pm"),
            ("l2", "L2", 12, "9am", "9pm"),
            ("l3", "L3", 12, "7am", "7pm"),
            ("n1", "N1", 12, "8pm", "8am"),
            ("n2", "N2", 12, "9pm", "9am"),
            ("n3", "N3", 12, "7pm", "7am"),
            ("d", "D", 9, "8am", "5pm"),
        ];

        Self {
            shifts: entries
                .into_iter()
                .map(|(id, code, hours, start, end)| {
                    Arc::new(Shift::new(id, code, Decimal::new(hours, 0), start, end))
                })
                .collect(),
        }
    }

    /// Returns all shifts in catalog order.
    pub fn shifts(&self) -> &[Arc<Shift>] {
        &self.shifts
    }

    /// Returns the number of shifts in the catalog.
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Returns true if the catalog has no shifts.
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Gets a shift by its id.
    pub fn get(&self, id: &str) -> EngineResult<&Arc<Shift>> {
        self.shifts
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| EngineError::ShiftNotFound {
                code: id.to_string(),
            })
    }

    /// Gets the first shift whose display code matches `code`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_calc::models::ShiftCatalog;
    /// use rust_decimal::Decimal;
    ///
    /// let catalog = ShiftCatalog::standard();
    /// let shift = catalog.find_by_code("M2")?;
    /// assert_eq!(shift.hours, Decimal::new(7, 0));
    /// # Ok::<(), shift_calc::error::EngineError>(())
    /// ```
    pub fn find_by_code(&self, code: &str) -> EngineResult<&Arc<Shift>> {
        self.shifts
            .iter()
            .find(|s| s.code == code)
            .ok_or_else(|| EngineError::ShiftNotFound {
                code: code.to_string(),
            })
    }

    /// Returns true if this exact shift instance belongs to the catalog.
    pub fn contains(&self, shift: &Arc<Shift>) -> bool {
        self.shifts.iter().any(|s| Arc::ptr_eq(s, shift))
    }
}

impl Default for ShiftCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
