//! Session state and dispatch.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::calculator::{CalculatorEngine, Key};
use crate::config::{SessionConfig, SessionSettings};
use crate::error::EngineResult;
use crate::ledger::ShiftLedger;
use crate::models::{LedgerSummary, Shift, ShiftCatalog};

use super::Action;

/// Owns the ledger and, when enabled, the calculator bound to its total.
///
/// After every ledger mutation the calculator is reseeded with the new total,
/// discarding any in-progress keypad entry. Calculator results are never
/// written back to the ledger.
///
/// # Example
///
/// ```
/// use shift_calc::session::ShiftSession;
/// use rust_decimal::Decimal;
///
/// let mut session = ShiftSession::default();
/// session.add_by_code("N1")?;
/// session.add_by_code("M")?;
/// assert_eq!(session.summary().display, "18");
///
/// session.press_label("/")?;
/// session.press_label("2")?;
/// session.press_label("=")?;
/// assert_eq!(session.summary().display, "9");
/// assert_eq!(session.total(), Decimal::new(18, 0));
/// # Ok::<(), shift_calc::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ShiftSession {
    id: Uuid,
    catalog: ShiftCatalog,
    ledger: ShiftLedger,
    calculator: Option<CalculatorEngine>,
}

impl ShiftSession {
    /// Creates a session over `catalog`.
    pub fn new(catalog: ShiftCatalog, settings: &SessionSettings) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            catalog,
            ledger: ShiftLedger::with_history_limit(settings.ledger.history_limit),
            calculator: settings
                .calculator
                .enabled
                .then(CalculatorEngine::new),
        };
        debug!(
            session_id = %session.id,
            shifts = session.catalog.len(),
            calculator = session.calculator.is_some(),
            "Session started"
        );
        session
    }

    /// Creates a session from a loaded configuration.
    pub fn from_config(config: SessionConfig) -> Self {
        let (settings, catalog) = config.into_parts();
        Self::new(catalog, &settings)
    }

    /// Returns the session's correlation id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the shift catalog.
    pub fn catalog(&self) -> &ShiftCatalog {
        &self.catalog
    }

    /// Returns the ledger.
    pub fn ledger(&self) -> &ShiftLedger {
        &self.ledger
    }

    /// Returns the bound calculator, if enabled.
    pub fn calculator(&self) -> Option<&CalculatorEngine> {
        self.calculator.as_ref()
    }

    /// Returns the ledger total.
    pub fn total(&self) -> Decimal {
        self.ledger.total()
    }

    /// Adds a shift to the ledger.
    pub fn add_shift(&mut self, shift: Arc<Shift>) {
        debug!(session_id = %self.id, code = %shift.code, hours = %shift.hours, "Adding shift");
        self.ledger.add(shift);
        self.total_changed();
    }

    /// Adds the catalog shift with display code `code`.
    pub fn add_by_code(&mut self, code: &str) -> EngineResult<()> {
        let shift = Arc::clone(self.catalog.find_by_code(code)?);
        self.add_shift(shift);
        Ok(())
    }

    /// Adds the catalog shift with id `id`.
    pub fn add_by_id(&mut self, id: &str) -> EngineResult<()> {
        let shift = Arc::clone(self.catalog.get(id)?);
        self.add_shift(shift);
        Ok(())
    }

    /// Clears the selection. Undoable.
    pub fn clear(&mut self) {
        debug!(session_id = %self.id, "Clearing selection");
        self.ledger.clear();
        self.total_changed();
    }

    /// Undoes the last add or clear.
    ///
    /// Returns false, changing nothing, when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.ledger.undo() {
            debug!(session_id = %self.id, "Nothing to undo");
            return false;
        }
        self.total_changed();
        true
    }

    /// Forwards a key press to the calculator.
    ///
    /// Ignored when the session has no calculator.
    pub fn press(&mut self, key: Key) {
        match self.calculator.as_mut() {
            Some(calculator) => calculator.press(key),
            None => debug!(session_id = %self.id, ?key, "No calculator bound, key ignored"),
        }
    }

    /// Translates a keypad label and forwards it to the calculator.
    pub fn press_label(&mut self, label: &str) -> EngineResult<()> {
        let key = Key::from_label(label).inspect_err(|_| {
            warn!(session_id = %self.id, label = %label, "Rejected keypad label");
        })?;
        self.press(key);
        Ok(())
    }

    /// Applies one presentation-layer action.
    pub fn apply(&mut self, action: Action) -> EngineResult<()> {
        match action {
            Action::AddShift(code) => self.add_by_code(&code)?,
            Action::Clear => self.clear(),
            Action::Undo => {
                self.undo();
            }
            Action::Key(key) => self.press(key),
        }
        Ok(())
    }

    /// Returns what the presentation layer should render.
    pub fn summary(&self) -> LedgerSummary {
        let total = self.ledger.total();
        let (display, is_error) = match &self.calculator {
            Some(calculator) => (calculator.display_value().to_string(), calculator.is_error()),
            None => (total.normalize().to_string(), false),
        };

        LedgerSummary {
            total,
            selected_codes: self.ledger.selected_codes(),
            can_undo: self.ledger.can_undo(),
            display,
            is_error,
        }
    }

    fn total_changed(&mut self) {
        let total = self.ledger.total();
        debug!(
            session_id = %self.id,
            total = %total,
            history_depth = self.ledger.history_depth(),
            "Ledger total changed"
        );
        if let Some(calculator) = self.calculator.as_mut() {
            calculator.on_total_changed(total);
        }
    }
}

impl Default for ShiftSession {
    fn default() -> Self {
        Self::from_config(SessionConfig::default())
    }
}
