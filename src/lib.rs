//! # shunting
//!
//! shunting is an arithmetic expression interpreter written in Rust.
//! It scans an infix expression into tokens, reorders them into postfix form
//! with the shunting-yard algorithm, and evaluates the postfix form with an
//! operand stack. Numbers may use `.` or `,` as the decimal separator, and all
//! arithmetic is single-precision floating point.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    error::InterpretError,
    interpreter::{evaluator::core::evaluate, lexer::tokenize, parser::core::parse},
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting an
/// expression. Lexing cannot fail, so errors come from the parser (unbalanced
/// parentheses) and from the evaluator (malformed postfix input).
///
/// # Responsibilities
/// - Defines one error enum per failing phase.
/// - Attaches the position of the offending token to every error.
/// - Wraps both phases in a single error for the full pipeline.
pub mod error;
/// Holds the three stages of interpretation and the token type they share.
///
/// This module ties together lexing, parsing and evaluation. Each stage is a
/// plain function from one sequence to the next and can be called on its own.
///
/// # Responsibilities
/// - Defines the `Token` and `Operator` types.
/// - Provides `tokenize`, `parse` and `evaluate`.
/// - Keeps every stack local to a single call.
pub mod interpreter;
/// General numeric helpers.
///
/// Provides tolerance-based comparison for single-precision results, used by
/// tests and by callers checking results against expected values.
pub mod util;

/// Interprets an arithmetic expression and returns its value.
///
/// This is exactly `evaluate(parse(tokenize(expression)))`: the expression is
/// scanned into tokens, reordered into postfix form and evaluated. An empty
/// expression evaluates to `0.0`.
///
/// # Errors
/// Returns `InterpretError::Parse` if the parentheses are unbalanced. The
/// parser only produces well-formed postfix sequences, so evaluation of a
/// balanced expression does not fail.
///
/// # Examples
/// ```
/// use shunting::interpret;
///
/// assert_eq!(interpret("1 + 2 * 3").unwrap(), 7.0);
/// assert_eq!(interpret("(1 + 2) * 3").unwrap(), 9.0);
/// assert_eq!(interpret("").unwrap(), 0.0);
///
/// // Unbalanced parentheses are an error.
/// assert!(interpret("(1 + 2").is_err());
/// ```
pub fn interpret(expression: &str) -> Result<f32, InterpretError> {
    debug!(target: "shunting::interpret", expression, "interpreting expression");

    let tokens = tokenize(expression);
    let postfix = parse(&tokens)?;
    let result = evaluate(&postfix)?;

    debug!(target: "shunting::interpret", result, "interpreted expression");
    Ok(result)
}
