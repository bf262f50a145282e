use logos::Logos;
use tracing::{debug, trace};

use crate::interpreter::token::Token;

/// Converts an expression into its token sequence.
///
/// Scanning never fails. Whitespace and any character that cannot start a
/// number or an operator is skipped without producing a token, so inserting
/// extra whitespace between tokens never changes the result.
///
/// # Parameters
/// - `expression`: The infix expression text.
///
/// # Returns
/// The tokens in the order they appear in `expression`.
///
/// # Example
/// ```
/// use shunting::interpreter::{
///     lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let tokens = tokenize(" 1 + 2 ");
/// assert_eq!(tokens,
///            vec![Token::Number(1.0), Token::Operator(Operator::Plus), Token::Number(2.0)]);
/// assert!(tokenize("").is_empty());
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            trace!(target: "shunting::lexer", token = %tok, span = ?lexer.span(), "scanned token");
            tokens.push(tok);
        } else {
            trace!(target: "shunting::lexer", slice = lexer.slice(), "skipped unrecognized input");
        }
    }

    debug!(target: "shunting::lexer", count = tokens.len(), "tokenized expression");
    tokens
}

/// Scans the value of a numeric literal made of digits and separators.
///
/// Both `.` and `,` act as the decimal separator. Digits before the first
/// separator build the integer part; each digit after it is added at the
/// next lower decimal place. Separators after the first one are absorbed
/// without effect, so `"1.2.3"` scans as `1.23`. A literal made only of
/// separators scans as `0.0`.
///
/// # Example
/// ```
/// use shunting::interpreter::lexer::scan_number;
///
/// assert_eq!(scan_number("42"), 42.0);
/// assert_eq!(scan_number("2,5"), 2.5);
/// assert_eq!(scan_number("."), 0.0);
/// ```
#[must_use]
pub fn scan_number(literal: &str) -> f32 {
    let mut value = 0.0_f32;
    let mut is_integer = true;
    let mut mantissa_rank = 1.0_f32;

    for byte in literal.bytes() {
        match byte {
            b'0'..=b'9' => {
                let digit = f32::from(byte - b'0');
                if is_integer {
                    value = value * 10.0 + digit;
                } else {
                    mantissa_rank *= 10.0;
                    value += digit / mantissa_rank;
                }
            },
            b'.' | b',' => is_integer = false,
            _ => {},
        }
    }

    value
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The scanned value; the number pattern only matches digits and separators,
/// so scanning always succeeds.
pub(crate) fn parse_number(lex: &logos::Lexer<Token>) -> f32 {
    scan_number(lex.slice())
}
