//! The calculator display value.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Text shown in place of a number after a failed computation.
pub const ERROR_MARKER: &str = "Error";

/// What the calculator display currently shows.
///
/// Numeric text is kept exactly as entered, so partial input such as `"0."`
/// or `"2.50"` survives until it is used in a computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readout {
    /// Numeric text being entered, or a stringified result.
    Value(String),
    /// A computation failed; no numeric value is available.
    Error,
}

impl Readout {
    /// The initial readout, `"0"`.
    pub fn zero() -> Self {
        Readout::Value("0".to_string())
    }

    /// Builds a readout from a computed value, without trailing zeros.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_calc::calculator::Readout;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Readout::from_value(Decimal::new(2000, 2)).text(), "20");
    /// assert_eq!(Readout::from_value(Decimal::new(25, 1)).text(), "2.5");
    /// ```
    pub fn from_value(value: Decimal) -> Self {
        Readout::Value(value.normalize().to_string())
    }

    /// Returns the display text, [`ERROR_MARKER`] in the error state.
    pub fn text(&self) -> &str {
        match self {
            Readout::Value(text) => text,
            Readout::Error => ERROR_MARKER,
        }
    }

    /// Parses the readout as a number.
    ///
    /// Returns `None` in the error state or if the text is not numeric. A
    /// trailing decimal point is accepted, so `"7."` reads as 7.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Readout::Value(text) => {
                let trimmed = text.strip_suffix('.').unwrap_or(text);
                Decimal::from_str(trimmed).ok()
            }
            Readout::Error => None,
        }
    }

    /// Returns true in the error state.
    pub fn is_error(&self) -> bool {
        matches!(self, Readout::Error)
    }
}

impl Default for Readout {
    fn default() -> Self {
        Readout::zero()
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Rounds `value` to at most `max_fraction_digits` decimals for display,
/// dropping trailing zeros.
///
/// Locale digits and grouping are left to the presentation layer.
///
/// # Examples
///
/// ```
/// use shift_calc::calculator::format_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let third = Decimal::ONE / Decimal::from(3);
/// assert_eq!(format_hours(third, 4), "0.3333");
/// assert_eq!(format_hours(Decimal::from_str("7.25").unwrap(), 1), "7.2");
/// assert_eq!(format_hours(Decimal::from(12), 1), "12");
/// ```
pub fn format_hours(value: Decimal, max_fraction_digits: u32) -> String {
    value.round_dp(max_fraction_digits).normalize().to_string()
}
