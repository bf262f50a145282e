use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::stack::OperandStack, token::Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Value of an empty expression.
pub const EMPTY_RESULT: f32 = 0.0;

/// Evaluates a postfix token sequence.
///
/// Numbers are pushed onto an operand stack. Each operator pops its right
/// operand, then its left operand, and pushes the result. Arithmetic is
/// IEEE-754 single precision: division by zero produces an infinity or NaN
/// rather than an error.
///
/// The result is the value on top of the stack once every token has been
/// consumed, or `0.0` when nothing was pushed. Values left below the top are
/// ignored.
///
/// # Parameters
/// - `postfix`: Tokens in postfix order, as produced by the parser.
///
/// # Errors
/// Sequences produced by the parser always evaluate successfully. Hand-built
/// sequences fail with:
/// - `MissingOperand` when an operator finds fewer than two operands.
/// - `UnexpectedParenthesis` when a parenthesis token is present.
///
/// # Example
/// ```
/// use shunting::interpreter::{
///     evaluator::core::evaluate,
///     token::{Operator, Token},
/// };
///
/// let postfix = [Token::Number(1.0), Token::Number(2.0), Token::Operator(Operator::Plus)];
/// assert_eq!(evaluate(&postfix).unwrap(), 3.0);
/// assert_eq!(evaluate(&[]).unwrap(), 0.0);
/// ```
pub fn evaluate(postfix: &[Token]) -> EvalResult<f32> {
    let mut stack = OperandStack::new();

    for (position, token) in postfix.iter().enumerate() {
        match *token {
            Token::Number(value) => stack.push(value),
            Token::Operator(op) => {
                if op.is_parenthesis() {
                    return Err(RuntimeError::UnexpectedParenthesis { operator: op, position });
                }
                let (left, right) = stack.pop_operands(op, position)?;
                let result =
                    op.apply(left, right)
                      .ok_or(RuntimeError::UnexpectedParenthesis { operator: op, position })?;
                trace!(target: "shunting::evaluator", %op, left, right, result, "applied operator");
                stack.push(result);
            },
        }
    }

    if stack.len() > 1 {
        debug!(target: "shunting::evaluator",
               ignored = stack.len() - 1,
               "operands left below the result");
    }

    let result = stack.top().unwrap_or(EMPTY_RESULT);
    debug!(target: "shunting::evaluator", result, "evaluated expression");
    Ok(result)
}
