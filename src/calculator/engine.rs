//! The calculator accumulator.
//!
//! Evaluation is immediate and left to right: `2 + 3 * 4 =` yields 20. Equals
//! does not repeat the last operation. Division by zero, overflow and
//! unparseable display text all land in the same error state, which only a
//! digit, a decimal point or clear can leave.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Digit, Key, Operator, Readout};

/// The observable state of the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorState {
    /// Building the display value digit by digit.
    Entry,
    /// An operator is set and the next digit starts a fresh operand.
    OperatorPending,
    /// The display holds the result of a completed computation.
    Result,
    /// A computation failed.
    Error,
}

/// Four-function keypad calculator.
///
/// # Example
///
/// ```
/// use shift_calc::calculator::{CalculatorEngine, Key};
///
/// let mut calc = CalculatorEngine::new();
/// for label in ["2", "+", "3", "*", "4", "="] {
///     calc.press(Key::from_label(label)?);
/// }
/// assert_eq!(calc.display_value(), "20");
/// # Ok::<(), shift_calc::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorEngine {
    readout: Readout,
    operand1: Option<Decimal>,
    pending_operator: Option<Operator>,
    awaiting_second_operand: bool,
    showing_result: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates a calculator showing `"0"`.
    pub fn new() -> Self {
        Self {
            readout: Readout::zero(),
            operand1: None,
            pending_operator: None,
            awaiting_second_operand: false,
            showing_result: false,
        }
    }

    /// Creates a calculator in entry state showing `value`.
    pub fn seeded(value: Decimal) -> Self {
        Self {
            readout: Readout::from_value(value),
            ..Self::new()
        }
    }

    /// Dispatches a single key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.input_digit(digit),
            Key::Decimal => self.input_decimal(),
            Key::Operator(op) => self.input_operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
        }
    }

    /// Enters a digit.
    ///
    /// Starts a fresh number after an error or an operator, replaces a lone
    /// `"0"`, and otherwise appends. A digit that would push the entry past
    /// the largest representable value is ignored.
    pub fn input_digit(&mut self, digit: Digit) {
        let c = digit.as_char();
        match &mut self.readout {
            Readout::Value(text) if !self.awaiting_second_operand && text.as_str() != "0" => {
                let mut candidate = text.clone();
                candidate.push(c);
                if Readout::Value(candidate.clone()).value().is_none() {
                    debug!(display = %text, digit = %c, "Digit ignored, entry would overflow");
                    return;
                }
                *text = candidate;
            }
            readout => *readout = Readout::Value(c.to_string()),
        }
        self.awaiting_second_operand = false;
        self.showing_result = false;
    }

    /// Enters a decimal point.
    ///
    /// Produces `"0."` when starting a fresh number and does nothing if the
    /// current number already has a point.
    pub fn input_decimal(&mut self) {
        match &mut self.readout {
            Readout::Value(text) if !self.awaiting_second_operand => {
                if text.contains('.') {
                    return;
                }
                text.push('.');
            }
            readout => *readout = Readout::Value("0.".to_string()),
        }
        self.awaiting_second_operand = false;
        self.showing_result = false;
    }

    /// Enters an operator.
    ///
    /// If a computation is pending and its second operand has been typed, it
    /// is evaluated first and its result becomes the new left operand.
    /// Ignored in the error state.
    pub fn input_operator(&mut self, op: Operator) {
        if self.readout.is_error() {
            return;
        }

        let lhs = match (self.operand1, self.pending_operator) {
            (Some(lhs), Some(prev)) if !self.awaiting_second_operand => {
                match self.evaluate(lhs, prev) {
                    Some(result) => {
                        self.readout = Readout::from_value(result);
                        result
                    }
                    None => {
                        self.enter_error();
                        return;
                    }
                }
            }
            _ => match self.readout.value() {
                Some(value) => value,
                None => {
                    self.enter_error();
                    return;
                }
            },
        };

        self.operand1 = Some(lhs);
        self.pending_operator = Some(op);
        self.awaiting_second_operand = true;
        self.showing_result = false;
        debug!(operand = %lhs, operator = %op, "Operator pending");
    }

    /// Completes the pending computation.
    ///
    /// Does nothing without a left operand and operator, while the second
    /// operand has not been typed yet, or in the error state. After a
    /// successful evaluation the operands are cleared, so pressing equals
    /// again has no effect.
    pub fn equals(&mut self) {
        if self.readout.is_error() || self.awaiting_second_operand {
            return;
        }
        let (Some(lhs), Some(op)) = (self.operand1, self.pending_operator) else {
            return;
        };

        match self.evaluate(lhs, op) {
            Some(result) => {
                self.readout = Readout::from_value(result);
                self.operand1 = None;
                self.pending_operator = None;
                self.awaiting_second_operand = false;
                self.showing_result = true;
                debug!(result = %self.readout, "Computation completed");
            }
            None => self.enter_error(),
        }
    }

    /// Resets to `"0"` with no pending computation.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Discards any in-progress entry and shows `total`.
    ///
    /// Called after every ledger mutation; the ledger always wins over the
    /// keypad.
    pub fn on_total_changed(&mut self, total: Decimal) {
        *self = Self::seeded(total);
    }

    /// Returns the display value.
    pub fn readout(&self) -> &Readout {
        &self.readout
    }

    /// Returns the display text, [`super::ERROR_MARKER`] in the error state.
    pub fn display_value(&self) -> &str {
        self.readout.text()
    }

    /// Returns the pending left operand.
    pub fn operand1(&self) -> Option<Decimal> {
        self.operand1
    }

    /// Returns the pending operator.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Returns true if the next digit starts a fresh operand.
    pub fn is_awaiting_second_operand(&self) -> bool {
        self.awaiting_second_operand
    }

    /// Returns true in the error state.
    pub fn is_error(&self) -> bool {
        self.readout.is_error()
    }

    /// Returns the current state.
    pub fn state(&self) -> CalculatorState {
        if self.readout.is_error() {
            CalculatorState::Error
        } else if self.awaiting_second_operand {
            CalculatorState::OperatorPending
        } else if self.showing_result {
            CalculatorState::Result
        } else {
            CalculatorState::Entry
        }
    }

    fn evaluate(&self, lhs: Decimal, op: Operator) -> Option<Decimal> {
        let rhs = self.readout.value()?;
        op.apply(lhs, rhs)
    }

    fn enter_error(&mut self) {
        warn!(
            operand = ?self.operand1,
            operator = ?self.pending_operator,
            display = %self.readout,
            "Calculation failed"
        );
        self.readout = Readout::Error;
        self.operand1 = None;
        self.pending_operator = None;
        self.awaiting_second_operand = false;
        self.showing_result = false;
    }
}
