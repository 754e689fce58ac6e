//! Keypad calculator bound to the ledger total.
//!
//! The engine is a small accumulator with four observable states (entry,
//! operator pending, result, error). It evaluates strictly left to right,
//! collapses every failure into a single error state, and is force-reseeded
//! with the ledger total whenever the ledger changes.

mod engine;
mod keys;
mod readout;

pub use engine::{CalculatorEngine, CalculatorState};
pub use keys::{Digit, Key, Operator};
pub use readout::{ERROR_MARKER, Readout, format_hours};
