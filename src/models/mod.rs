//! Core data models for the shift calculator.
//!
//! This module contains the shift catalog types and the summary handed to
//! the presentation layer.

mod catalog;
mod shift;
mod summary;

pub use catalog::ShiftCatalog;
pub use shift::Shift;
pub use summary::LedgerSummary;
