use thiserror::Error;

/// Parsing errors.
///
/// Defines the errors that can occur while reordering an infix token sequence
/// into postfix form. The only parse failure is an unbalanced parenthesis.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors that can be raised while evaluating a postfix token
/// sequence: an operator without enough operands, or a parenthesis that has no
/// meaning in postfix order.
pub mod runtime_error;

pub use parse_error::{Parenthesis, ParseError};
pub use runtime_error::RuntimeError;

/// Represents every failure of the full interpretation pipeline.
///
/// Each variant wraps the error of one phase unchanged; its message is the
/// message of the wrapped error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InterpretError {
    /// The expression could not be reordered into postfix form.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix form could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
