//! The rendered view of a session.
//!
//! [`LedgerSummary`] is everything the button grid needs to redraw after an
//! action: the running total, the codes of the selected shifts in order, whether
//! the undo control is enabled, and the text for the main display.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Snapshot of the observable session state.
///
/// # Example
///
/// ```
/// use shift_calc::models::LedgerSummary;
/// use rust_decimal::Decimal;
///
/// let summary = LedgerSummary {
///     total: Decimal::new(18, 0),
///     selected_codes: vec!["M".to_string(), "N1".to_string()],
///     can_undo: true,
///     display: "18".to_string(),
///     is_error: false,
/// };
/// assert!(!summary.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Sum of the hours of every selected shift.
    pub total: Decimal,
    /// Codes of the selected shifts, in selection order, duplicates included.
    pub selected_codes: Vec<String>,
    /// Whether there is a snapshot to undo to.
    pub can_undo: bool,
    /// Text for the main display: the calculator display when a calculator is
    /// bound, otherwise the ledger total.
    pub display: String,
    /// True when the calculator is in its error state.
    pub is_error: bool,
}

impl LedgerSummary {
    /// Returns true if no shifts are selected.
    pub fn is_empty(&self) -> bool {
        self.selected_codes.is_empty()
    }
}
