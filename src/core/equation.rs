//! Numberle equation representation
//!
//! An `Equation` stores a 7-symbol guess or target over the Numberle alphabet.

use super::validator::{self, ValidationError};
use std::fmt;
use std::str::FromStr;

/// Number of symbols in every equation
pub const EQUATION_LEN: usize = 7;

/// Every symbol that may appear in an equation, in keyboard order
pub const ALPHABET: [char; 15] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '+', '-', '*', '/', '=',
];

/// Check whether `c` is one of the four arithmetic operators
///
/// The `=` sign is deliberately not an operator.
#[inline]
#[must_use]
pub const fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Check whether `c` belongs to the Numberle alphabet
#[inline]
#[must_use]
pub const fn is_symbol(c: char) -> bool {
    c.is_ascii_digit() || is_operator(c) || c == '='
}

/// A 7-symbol Numberle equation
///
/// Construct with [`Equation::new`] for a fully balanced equation, or through
/// [`validator::validate`] with `strict = false` for a well-formed guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    text: String,
    symbols: [u8; EQUATION_LEN],
}

impl Equation {
    /// Parse a strictly valid equation (both sides must be equal)
    ///
    /// # Errors
    /// Returns the first `ValidationError` the input trips over.
    ///
    /// # Examples
    /// ```
    /// use numberle::core::Equation;
    ///
    /// let equation = Equation::new("2+3*2=8").unwrap();
    /// assert_eq!(equation.text(), "2+3*2=8");
    ///
    /// assert!(Equation::new("1+2=3+4").is_err());
    /// assert!(Equation::new("1+2=3").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, ValidationError> {
        validator::validate(text.as_ref(), true)
    }

    /// Build from text that already passed the charset and length checks
    ///
    /// # Panics
    /// Will not panic for validator output - the length is checked before this is called.
    pub(crate) fn from_checked(text: &str) -> Self {
        let symbols: [u8; EQUATION_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Self {
            text: text.to_string(),
            symbols,
        }
    }

    /// Get the equation as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the equation as a byte array
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[u8; EQUATION_LEN] {
        &self.symbols
    }

    /// Iterate over the symbols in order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().map(|&b| char::from(b))
    }

    /// Check if the equation contains a specific symbol
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: char) -> bool {
        self.chars().any(|c| c == symbol)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Equation {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
