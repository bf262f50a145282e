use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A parenthesis has no partner.
    ///
    /// Raised for a `)` with no open `(` before it, and for a `(` that is
    /// still open once the whole input has been consumed.
    #[error("Error at token {position}: Mismatched parenthesis, {missing} parenthesis not found.")]
    MismatchedParenthesis {
        /// The kind of parenthesis that is missing.
        missing:  Parenthesis,
        /// Zero-based index of the unmatched parenthesis in the infix input.
        position: usize,
    },
}

/// The two kinds of parenthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parenthesis {
    /// `(`
    Opening,
    /// `)`
    Closing,
}

impl fmt::Display for Parenthesis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Opening => write!(f, "opening"),
            Self::Closing => write!(f, "closing"),
        }
    }
}
