//! Equation validation
//!
//! Checks run in a fixed order and the first failure wins, so every rejected
//! guess carries exactly one `ValidationError`.

use super::equation::{EQUATION_LEN, Equation, is_operator, is_symbol};
use super::evaluator::evaluate;
use thiserror::Error;

/// Maximum difference between the two sides of a balanced equation
pub const TOLERANCE: f64 = 1e-4;

/// Reason a guess was rejected, in check order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{ch}' is not allowed; use only 0-9 + - * / =")]
    Charset { ch: char },

    #[error("too short: an equation has exactly 7 symbols, got {len}")]
    TooShort { len: usize },

    #[error("too long: an equation has exactly 7 symbols, got {len}")]
    TooLong { len: usize },

    #[error("missing '=' sign")]
    MissingEquals,

    #[error("missing an arithmetic operator (+ - * /)")]
    MissingOperator,

    #[error("arithmetic operators cannot be next to each other")]
    ConsecutiveOperators,

    #[error("the left side does not equal the right side")]
    Unbalanced,
}

impl ValidationError {
    /// Position of the failing check in the validation order (0-6)
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Charset { .. } => 0,
            Self::TooShort { .. } => 1,
            Self::TooLong { .. } => 2,
            Self::MissingEquals => 3,
            Self::MissingOperator => 4,
            Self::ConsecutiveOperators => 5,
            Self::Unbalanced => 6,
        }
    }
}

/// Validate a guess and return it as an [`Equation`]
///
/// The structural checks always run. The equality check runs only when `strict`
/// is set, so a well-formed but false equation is a legal guess in lenient mode.
///
/// # Errors
/// Returns the first failing check as a `ValidationError`.
///
/// # Examples
/// ```
/// use numberle::core::{ValidationError, validate};
///
/// assert!(validate("2+3*2=8", true).is_ok());
/// assert_eq!(validate("1+2=3+4", true), Err(ValidationError::Unbalanced));
/// assert!(validate("1+2=3+4", false).is_ok());
/// ```
pub fn validate(input: &str, strict: bool) -> Result<Equation, ValidationError> {
    if let Some(ch) = input.chars().find(|&c| !is_symbol(c)) {
        return Err(ValidationError::Charset { ch });
    }

    // Every symbol is ASCII from here on, so byte length is symbol count
    let len = input.len();
    if len < EQUATION_LEN {
        return Err(ValidationError::TooShort { len });
    }
    if len > EQUATION_LEN {
        return Err(ValidationError::TooLong { len });
    }

    if !input.contains('=') {
        return Err(ValidationError::MissingEquals);
    }

    if !has_operator_before_end(input) {
        return Err(ValidationError::MissingOperator);
    }

    if has_adjacent_operators(input) {
        return Err(ValidationError::ConsecutiveOperators);
    }

    if strict {
        check_balance(input)?;
    }

    Ok(Equation::from_checked(input))
}

// Both sides must evaluate and agree within TOLERANCE. A side that fails to
// evaluate, including division by zero, counts as unbalanced.
fn check_balance(input: &str) -> Result<(), ValidationError> {
    let mut sides = input.split('=');
    let (Some(lhs), Some(rhs), None) = (sides.next(), sides.next(), sides.next()) else {
        return Err(ValidationError::Unbalanced);
    };

    match (evaluate(lhs), evaluate(rhs)) {
        (Ok(left), Ok(right)) if (left - right).abs() <= TOLERANCE => Ok(()),
        _ => Err(ValidationError::Unbalanced),
    }
}

// An operator must be followed by at least one more symbol.
fn has_operator_before_end(input: &str) -> bool {
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if is_operator(c) && chars.peek().is_some() {
            return true;
        }
    }
    false
}

fn has_adjacent_operators(input: &str) -> bool {
    input
        .as_bytes()
        .windows(2)
        .any(|pair| is_operator(char::from(pair[0])) && is_operator(char::from(pair[1])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_balanced_equations() {
        for text in ["2+3*2=8", "43+3=46", "0/314=0", "8=2+3*2", "6/3*2=4", "9-8+1=2"] {
            assert!(validate(text, true).is_ok(), "{text} should be valid");
        }
    }

    #[test]
    fn each_check_reports_its_own_error() {
        assert_eq!(
            validate("1+2=3%4", true),
            Err(ValidationError::Charset { ch: '%' })
        );
        assert_eq!(
            validate("1+2=3", true),
            Err(ValidationError::TooShort { len: 5 })
        );
        assert_eq!(
            validate("1+2=3+4+5", true),
            Err(ValidationError::TooLong { len: 9 })
        );
        assert_eq!(validate("1+2+3-1", true), Err(ValidationError::MissingEquals));
        assert_eq!(validate("123=123", true), Err(ValidationError::MissingOperator));
        assert_eq!(
            validate("1+-3=+4", true),
            Err(ValidationError::ConsecutiveOperators)
        );
        assert_eq!(validate("1+2=3+4", true), Err(ValidationError::Unbalanced));
    }

    #[test]
    fn first_failing_check_wins() {
        // Bad character beats bad length
        assert_eq!(validate("1%2", true), Err(ValidationError::Charset { ch: '%' }));
        // Bad length beats missing '='
        assert_eq!(validate("1+2", true), Err(ValidationError::TooShort { len: 3 }));
        // Missing '=' beats adjacent operators
        assert_eq!(validate("1+-3*45", true), Err(ValidationError::MissingEquals));
    }

    #[test]
    fn error_indices_follow_check_order() {
        let expected = [
            ("1+2=3%4", 0),
            ("1+2=3", 1),
            ("1+2=3+4+5", 2),
            ("1+2+3-1", 3),
            ("123=123", 4),
            ("1+-3=+4", 5),
            ("1+2=3+4", 6),
        ];
        for (text, index) in expected {
            assert_eq!(validate(text, true).unwrap_err().index(), index, "{text}");
        }
    }

    #[test]
    fn trailing_operator_does_not_count() {
        assert_eq!(validate("12345=+", true), Err(ValidationError::MissingOperator));
        assert_eq!(validate("12345=+", false), Err(ValidationError::MissingOperator));
    }

    #[test]
    fn equals_is_not_an_operator() {
        // '=' next to an operator is structurally fine; the sides decide
        assert_eq!(validate("1+2=+34", true), Err(ValidationError::Unbalanced));
        assert!(validate("1+2=+34", false).is_ok());
    }

    #[test]
    fn lenient_mode_skips_only_the_equality_check() {
        assert!(validate("1+2=3+4", false).is_ok());
        assert_eq!(
            validate("1+2=3%4", false),
            Err(ValidationError::Charset { ch: '%' })
        );
        assert_eq!(
            validate("1+-3=+4", false),
            Err(ValidationError::ConsecutiveOperators)
        );
    }

    #[test]
    fn multiple_equals_is_unbalanced() {
        assert_eq!(validate("1+1=2=2", true), Err(ValidationError::Unbalanced));
        assert_eq!(validate("=1+1=2=", true), Err(ValidationError::Unbalanced));
    }

    #[test]
    fn empty_side_is_unbalanced() {
        assert_eq!(validate("=12+345", true), Err(ValidationError::Unbalanced));
        assert_eq!(validate("12+345=", true), Err(ValidationError::Unbalanced));
    }

    #[test]
    fn division_by_zero_is_unbalanced() {
        assert_eq!(validate("1/0+1=1", true), Err(ValidationError::Unbalanced));
        assert_eq!(validate("0=0/0+0", true), Err(ValidationError::Unbalanced));
    }

    #[test]
    fn tolerance_accepts_near_equal_sides() {
        assert!(check_balance("1/3*3=1").is_ok());
        assert!(check_balance("10/4=2").is_err());
    }
}
