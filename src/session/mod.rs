//! The session controller.
//!
//! A [`ShiftSession`] is the single owner of the ledger and the optional
//! bound calculator. The presentation layer forwards every button press to
//! it and renders the returned [`crate::models::LedgerSummary`].

mod action;
mod controller;

pub use action::Action;
pub use controller::ShiftSession;
