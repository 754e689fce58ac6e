//! Shift selection ledger.
//!
//! The ledger keeps the ordered list of selected shifts and a stack of
//! snapshots taken before every mutation, so that adds and clears can be
//! undone one step at a time.

mod history;
mod shift_ledger;

pub use history::History;
pub use shift_ledger::{Selection, ShiftLedger};
