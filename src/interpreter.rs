/// The evaluator module computes the value of a postfix token sequence.
///
/// The evaluator walks the postfix sequence once with an operand stack,
/// applying each operator to the two values below it. It is the last stage of
/// interpretation.
///
/// # Responsibilities
/// - Applies `+ - * /` in single-precision floating point.
/// - Yields `0.0` for an empty sequence.
/// - Reports operators that are short of operands instead of underflowing.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw expression and produces a sequence of tokens: numeric
/// literals (with `.` or `,` as the decimal separator) and operator symbols.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Scans numeric literals digit by digit.
/// - Skips whitespace and unrecognized characters; it never fails.
pub mod lexer;
/// The parser module reorders infix tokens into postfix order.
///
/// The parser runs the shunting-yard algorithm over the lexer's output,
/// resolving precedence and grouping so the evaluator can work without
/// lookahead.
///
/// # Responsibilities
/// - Orders operators after their operands, respecting precedence.
/// - Treats every operator as left-associative.
/// - Detects unbalanced parentheses.
pub mod parser;
/// The token module defines the values exchanged between stages.
///
/// `Token` is the unit of every sequence in the pipeline. `Operator` names the
/// six operator symbols and knows its precedence and how to apply itself.
pub mod token;
