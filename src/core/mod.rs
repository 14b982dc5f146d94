//! Core domain types for Numberle
//!
//! Equation parsing, evaluation, validation and feedback scoring.
//! Everything here is pure and synchronous.

mod equation;
mod evaluator;
mod feedback;
mod knowledge;
mod validator;

pub use equation::{ALPHABET, EQUATION_LEN, Equation, is_operator, is_symbol};
pub use evaluator::{EvalError, evaluate};
pub use feedback::{Feedback, Mark};
pub use knowledge::{CharacterKnowledge, KeyState};
pub use validator::{TOLERANCE, ValidationError, validate};
