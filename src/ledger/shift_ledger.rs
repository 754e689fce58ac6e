//! The shift ledger and its operations.

use std::num::NonZeroUsize;
use std::sync::Arc;

use rust_decimal::Decimal;

use crate::models::Shift;

use super::History;

/// An ordered list of selected shifts. The same shift may appear many times.
pub type Selection = Vec<Arc<Shift>>;

/// Holds the current selection and the undo history.
///
/// Every mutating operation pushes a copy of the current selection onto the
/// history first. The total is always derived from the selection and never
/// stored.
///
/// # Example
///
/// ```
/// use shift_calc::ledger::ShiftLedger;
/// use shift_calc::models::ShiftCatalog;
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// let catalog = ShiftCatalog::standard();
/// let mut ledger = ShiftLedger::new();
///
/// ledger.add(Arc::clone(catalog.find_by_code("M")?));
/// ledger.add(Arc::clone(catalog.find_by_code("N1")?));
/// assert_eq!(ledger.total(), Decimal::new(18, 0));
///
/// ledger.undo();
/// assert_eq!(ledger.total(), Decimal::new(6, 0));
/// # Ok::<(), shift_calc::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftLedger {
    selection: Selection,
    history: History,
}

impl ShiftLedger {
    /// Creates an empty ledger with unbounded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ledger whose history keeps at most `limit` snapshots.
    /// `None` means unbounded.
    pub fn with_history_limit(limit: Option<NonZeroUsize>) -> Self {
        Self {
            selection: Selection::new(),
            history: limit.map(History::with_limit).unwrap_or_default(),
        }
    }

    /// Appends a shift to the selection.
    pub fn add(&mut self, shift: Arc<Shift>) {
        self.history.push(self.selection.clone());
        self.selection.push(shift);
    }

    /// Empties the selection. The previous selection can be restored with
    /// [`ShiftLedger::undo`], even when it was already empty.
    pub fn clear(&mut self) {
        let previous = std::mem::take(&mut self.selection);
        self.history.push(previous);
    }

    /// Restores the most recent snapshot.
    ///
    /// Returns false, leaving the ledger untouched, when the history is empty.
    /// The popped snapshot is consumed: there is no redo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(snapshot) => {
                self.selection = snapshot;
                true
            }
            None => false,
        }
    }

    /// Returns the sum of the hours of every selected shift.
    pub fn total(&self) -> Decimal {
        self.selection.iter().map(|s| s.hours).sum()
    }

    /// Returns the selected shifts in selection order.
    pub fn selection(&self) -> &[Arc<Shift>] {
        &self.selection
    }

    /// Returns the codes of the selected shifts in selection order.
    pub fn selected_codes(&self) -> Vec<String> {
        self.selection.iter().map(|s| s.code.clone()).collect()
    }

    /// Returns true if there is a snapshot to undo to.
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns the number of snapshots available to undo.
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }
}
