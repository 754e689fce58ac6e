//! Shift hour calculator.
//!
//! This crate holds the state behind a shift-selection keypad: a ledger of
//! selected shifts with an undo history, and an optional four-function
//! calculator that is reseeded with the ledger total whenever it changes.
//! Rendering is left to the caller, which drives a [`session::ShiftSession`]
//! and renders its [`models::LedgerSummary`] after every action.

#![warn(missing_docs)]

pub mod calculator;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod session;
