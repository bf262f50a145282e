use thiserror::Error;

use crate::interpreter::token::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
///
/// Postfix sequences produced by the parser never trigger these; they guard
/// hand-built sequences passed straight to the evaluator.
pub enum RuntimeError {
    /// A binary operator found fewer than two operands on the stack.
    #[error("Error at token {position}: Operator '{operator}' needs two operands.")]
    MissingOperand {
        /// The operator that was being applied.
        operator: Operator,
        /// Zero-based index of the operator in the postfix input.
        position: usize,
    },
    /// A parenthesis appeared in postfix input.
    #[error("Error at token {position}: Parenthesis '{operator}' is not allowed in postfix input.")]
    UnexpectedParenthesis {
        /// The parenthesis encountered.
        operator: Operator,
        /// Zero-based index of the parenthesis in the postfix input.
        position: usize,
    },
}
