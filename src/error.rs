//! Error types for the shift calculator.
//!
//! Ledger and calculator operations never fail; errors only arise at the
//! edges, when loading a catalog, looking up a shift, or translating a raw
//! key label into a typed key.

use thiserror::Error;

/// The main error type for the shift calculator.
///
/// # Example
///
/// ```
/// use shift_calc::error::EngineError;
///
/// let error = EngineError::ShiftNotFound {
///     code: "Z9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Shift not found: Z9");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A shift definition was invalid.
    #[error("Invalid shift '{shift_id}': {message}")]
    InvalidShift {
        /// The ID of the invalid shift.
        shift_id: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// Two catalog entries share the same id.
    #[error("Duplicate shift id: {shift_id}")]
    DuplicateShift {
        /// The repeated id.
        shift_id: String,
    },

    /// No catalog entry matches the requested id or code.
    #[error("Shift not found: {code}")]
    ShiftNotFound {
        /// The id or code that was looked up.
        code: String,
    },

    /// A keypad label did not map to any calculator key.
    #[error("Invalid calculator key: '{key}'")]
    InvalidKey {
        /// The rejected label.
        key: String,
    },

    /// A configuration value was out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of the problem.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
