//! Configuration loading for the shift calculator.
//!
//! A session is configured from a single YAML file holding the shift catalog
//! and the ledger and calculator settings.
//!
//! # Example
//!
//! ```no_run
//! use shift_calc::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded {} shifts", loader.catalog().len());
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, SESSION_FILE};
pub use types::{CalculatorSettings, LedgerSettings, SessionConfig, SessionSettings};
