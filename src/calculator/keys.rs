//! Typed keypad input.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single decimal digit, 0 through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, or `None` if `value` is greater than 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Returns the numeric value of the digit.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the digit as an ASCII character.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = EngineError;

    fn try_from(c: char) -> EngineResult<Self> {
        c.to_digit(10)
            .and_then(|d| Digit::new(d as u8))
            .ok_or_else(|| EngineError::InvalidKey { key: c.to_string() })
    }
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division. Dividing by exactly zero is an error.
    Divide,
}

impl Operator {
    /// Returns the ASCII symbol for the operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Applies the operator to `lhs` and `rhs`.
    ///
    /// Returns `None` on division by zero or on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_calc::calculator::Operator;
    /// use rust_decimal::Decimal;
    ///
    /// let six = Decimal::new(6, 0);
    /// assert_eq!(Operator::Divide.apply(six, Decimal::new(4, 0)), Some(Decimal::new(15, 1)));
    /// assert_eq!(Operator::Divide.apply(six, Decimal::ZERO), None);
    /// ```
    pub fn apply(self, lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => {
                if rhs.is_zero() {
                    None
                } else {
                    lhs.checked_div(rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = EngineError;

    /// Accepts both the ASCII symbols and the typographic keypad glyphs.
    fn from_str(s: &str) -> EngineResult<Self> {
        match s {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Subtract),
            "*" | "×" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            _ => Err(EngineError::InvalidKey { key: s.to_string() }),
        }
    }
}

/// One press on the calculator keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A digit key.
    Digit(Digit),
    /// The decimal point key.
    Decimal,
    /// One of the four operator keys.
    Operator(Operator),
    /// The equals key.
    Equals,
    /// The clear key.
    Clear,
}

impl Key {
    /// Translates a keypad label into a key.
    ///
    /// Accepts `0`-`9`, `.`, `+`, `-`/`−`, `*`/`×`, `/`/`÷`, `=` and `C`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_calc::calculator::{Key, Operator};
    ///
    /// assert_eq!(Key::from_label("×")?, Key::Operator(Operator::Multiply));
    /// assert_eq!(Key::from_label("=")?, Key::Equals);
    /// assert!(Key::from_label("%").is_err());
    /// # Ok::<(), shift_calc::error::EngineError>(())
    /// ```
    pub fn from_label(label: &str) -> EngineResult<Self> {
        let label = label.trim();
        match label {
            "." => return Ok(Key::Decimal),
            "=" => return Ok(Key::Equals),
            "C" | "c" => return Ok(Key::Clear),
            _ => {}
        }

        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() {
                return Digit::try_from(c).map(Key::Digit);
            }
        }

        label.parse::<Operator>().map(Key::Operator)
    }

    /// Returns the digit key for `value`, or `None` if it is not 0-9.
    pub fn digit(value: u8) -> Option<Self> {
        Digit::new(value).map(Key::Digit)
    }
}

impl FromStr for Key {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        Key::from_label(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(0).map(Digit::value), Some(0));
        assert_eq!(Digit::new(9).map(Digit::as_char), Some('9'));
        assert!(Digit::new(10).is_none());
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::try_from('7').unwrap().value(), 7);
        assert!(matches!(
            Digit::try_from('x'),
            Err(EngineError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_operator_apply() {
        let a = Decimal::new(12, 0);
        let b = Decimal::new(5, 0);
        assert_eq!(Operator::Add.apply(a, b), Some(Decimal::new(17, 0)));
        assert_eq!(Operator::Subtract.apply(b, a), Some(Decimal::new(-7, 0)));
        assert_eq!(Operator::Multiply.apply(a, b), Some(Decimal::new(60, 0)));
        assert_eq!(Operator::Divide.apply(a, b), Some(Decimal::new(24, 1)));
    }

    #[test]
    fn test_divide_by_zero_is_none() {
        assert_eq!(Operator::Divide.apply(Decimal::ONE, Decimal::ZERO), None);
        assert_eq!(Operator::Divide.apply(Decimal::ZERO, Decimal::new(0, 3)), None);
    }

    #[test]
    fn test_multiply_overflow_is_none() {
        assert_eq!(Operator::Multiply.apply(Decimal::MAX, Decimal::TWO), None);
    }

    #[test]
    fn test_operator_parses_keypad_glyphs() {
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("−".parse::<Operator>().unwrap(), Operator::Subtract);
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert!("^".parse::<Operator>().is_err());
    }

    #[test]
    fn test_operator_display_uses_ascii_symbol() {
        assert_eq!(Operator::Multiply.to_string(), "*");
    }

    #[test]
    fn test_key_from_label() {
        assert_eq!(Key::from_label("0").unwrap(), Key::digit(0).unwrap());
        assert_eq!(Key::from_label(".").unwrap(), Key::Decimal);
        assert_eq!(Key::from_label(" = ").unwrap(), Key::Equals);
        assert_eq!(Key::from_label("C").unwrap(), Key::Clear);
        assert_eq!(
            Key::from_label("-").unwrap(),
            Key::Operator(Operator::Subtract)
        );
    }

    #[test]
    fn test_key_from_label_rejects_unknown() {
        for label in ["", "12", "%", "x", "٣"] {
            match Key::from_label(label) {
                Err(EngineError::InvalidKey { key }) => assert_eq!(key, label),
                other => panic!("Expected InvalidKey for {:?}, got {:?}", label, other),
            }
        }
    }
}
