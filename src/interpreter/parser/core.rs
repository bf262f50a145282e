use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::{
        parser::shunting_yard::ShuntingYard,
        token::{Token, render},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Reorders an infix token sequence into postfix (reverse Polish) order.
///
/// Numbers keep their relative order. Operators are emitted after their
/// operands, with `*` and `/` binding tighter than `+` and `-`, operators of
/// equal precedence grouped left to right, and parentheses overriding both.
/// Parentheses never appear in the output.
///
/// # Parameters
/// - `infix`: Tokens in the order they were written.
///
/// # Returns
/// The equivalent postfix sequence. An empty input yields an empty output.
///
/// # Errors
/// - `MismatchedParenthesis` with `missing: Opening` for a `)` that has no
///   open `(` before it.
/// - `MismatchedParenthesis` with `missing: Closing` for a `(` still open at
///   the end of the input.
///
/// # Example
/// ```
/// use shunting::interpreter::{
///     parser::core::parse,
///     token::{Operator, Token},
/// };
///
/// let one = Token::Number(1.0);
/// let two = Token::Number(2.0);
/// let plus = Token::Operator(Operator::Plus);
///
/// assert_eq!(parse(&[one, plus, two]).unwrap(), vec![one, two, plus]);
/// assert!(parse(&[one, Token::Operator(Operator::RParen)]).is_err());
/// ```
pub fn parse(infix: &[Token]) -> ParseResult<Vec<Token>> {
    let mut yard = ShuntingYard::with_capacity(infix.len());

    for (position, token) in infix.iter().enumerate() {
        match *token {
            Token::Number(_) => yard.push_operand(*token),
            Token::Operator(op) => yard.push_operator(op, position)?,
        }
    }

    let postfix = yard.finish()?;
    debug!(target: "shunting::parser", postfix = %render(&postfix), "parsed expression");
    Ok(postfix)
}
