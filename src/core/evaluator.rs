//! Arithmetic evaluation of one side of an equation
//!
//! Operator-precedence evaluation with an operand stack and an operator stack.
//! `*` and `/` bind tighter than `+` and `-`; equal precedence resolves left to right.
//! There are no parentheses and no unary operators.

use thiserror::Error;

/// Why an expression could not be evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("operator '{op}' is missing an operand")]
    MissingOperand { op: char },

    #[error("division by zero")]
    DivisionByZero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, EvalError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(EvalError::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
        }
    }
}

/// Evaluate an arithmetic expression over non-negative integer literals
///
/// # Errors
/// - `Empty` for an empty string
/// - `UnexpectedChar` for anything other than digits and `+ - * /`
/// - `MissingOperand` for leading, trailing or doubled operators
/// - `DivisionByZero` when a divisor evaluates to zero
///
/// # Examples
/// ```
/// use numberle::core::evaluate;
///
/// assert_eq!(evaluate("2+3*2"), Ok(8.0));
/// assert_eq!(evaluate("10/2-1"), Ok(4.0));
/// assert!(evaluate("4+").is_err());
/// ```
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    if expr.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut operands: Vec<f64> = Vec::new();
    let mut operators: Vec<Operator> = Vec::new();
    let mut literal: Option<f64> = None;

    for (position, ch) in expr.chars().enumerate() {
        if let Some(digit) = ch.to_digit(10) {
            literal = Some(literal.unwrap_or(0.0) * 10.0 + f64::from(digit));
            continue;
        }

        let op = Operator::from_char(ch).ok_or(EvalError::UnexpectedChar { ch, position })?;
        let value = literal.take().ok_or(EvalError::MissingOperand { op: ch })?;
        operands.push(value);

        while let Some(&top) = operators.last()
            && top.precedence() >= op.precedence()
        {
            operators.pop();
            reduce(&mut operands, top)?;
        }
        operators.push(op);
    }

    let Some(value) = literal else {
        let op = operators.last().map_or('?', |&op| op.symbol());
        return Err(EvalError::MissingOperand { op });
    };
    operands.push(value);

    while let Some(op) = operators.pop() {
        reduce(&mut operands, op)?;
    }

    operands.pop().ok_or(EvalError::Empty)
}

// Pops two operands, applies `op`, pushes the result.
fn reduce(operands: &mut Vec<f64>, op: Operator) -> Result<(), EvalError> {
    let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
        return Err(EvalError::MissingOperand { op: op.symbol() });
    };
    operands.push(op.apply(lhs, rhs)?);
    Ok(())
}
