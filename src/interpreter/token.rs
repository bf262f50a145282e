use std::fmt;

use logos::Logos;

use crate::interpreter::lexer::parse_number;

/// Represents a lexical token of an arithmetic expression.
///
/// A token is either a numeric literal or one of the six operator symbols.
/// Every stage of the interpreter consumes and produces sequences of this
/// type, so it is small and `Copy`.
///
/// Characters that are neither part of a number nor an operator are skipped
/// by the lexer and never become tokens.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[^0-9.,+\-*/()]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `2,5`.
    #[regex(r"[0-9.,]+", parse_number)]
    Number(f32),
    /// Operator and grouping tokens: `+`, `-`, `*`, `/`, `(` and `)`.
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("(", |_| Operator::LParen)]
    #[token(")", |_| Operator::RParen)]
    Operator(Operator),
}

impl Token {
    /// Returns the numeric payload, or `None` for operator tokens.
    #[must_use]
    pub const fn number(self) -> Option<f32> {
        match self {
            Self::Number(value) => Some(value),
            Self::Operator(_) => None,
        }
    }

    /// Returns the operator payload, or `None` for number tokens.
    #[must_use]
    pub const fn operator(self) -> Option<Operator> {
        match self {
            Self::Number(_) => None,
            Self::Operator(op) => Some(op),
        }
    }
}

impl From<f32> for Token {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// The operator symbols understood by the interpreter.
///
/// The four arithmetic operators are binary and left-associative. The two
/// parentheses only group; they carry no precedence and never reach the
/// evaluator through the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// Precedence shared by `+` and `-`.
pub const ADDITIVE_PRECEDENCE: u8 = 0;
/// Precedence shared by `*` and `/`.
pub const MULTIPLICATIVE_PRECEDENCE: u8 = 1;

impl Operator {
    /// Returns the character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::LParen => '(',
            Self::RParen => ')',
        }
    }

    /// Looks up the operator written as `symbol`.
    ///
    /// # Example
    /// ```
    /// use shunting::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('*'), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol('^'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '(' => Some(Self::LParen),
            ')' => Some(Self::RParen),
            _ => None,
        }
    }

    /// Returns the binding strength of a binary operator.
    ///
    /// Multiplicative operators bind tighter than additive ones. Parentheses
    /// have no precedence and yield `None`.
    ///
    /// # Example
    /// ```
    /// use shunting::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
    /// assert!(Operator::Mul.precedence() > Operator::Plus.precedence());
    /// assert_eq!(Operator::LParen.precedence(), None);
    /// ```
    #[must_use]
    pub const fn precedence(self) -> Option<u8> {
        match self {
            Self::Plus | Self::Minus => Some(ADDITIVE_PRECEDENCE),
            Self::Mul | Self::Div => Some(MULTIPLICATIVE_PRECEDENCE),
            Self::LParen | Self::RParen => None,
        }
    }

    #[must_use]
    pub const fn is_parenthesis(self) -> bool {
        matches!(self, Self::LParen | Self::RParen)
    }

    /// Applies a binary operator to two operands.
    ///
    /// Arithmetic follows IEEE-754 single precision, so dividing by zero
    /// yields an infinity or NaN instead of failing. Returns `None` for
    /// parentheses, which are not operations.
    ///
    /// # Example
    /// ```
    /// use shunting::interpreter::token::Operator;
    ///
    /// assert_eq!(Operator::Minus.apply(1.0, 3.0), Some(-2.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), Some(f32::INFINITY));
    /// assert_eq!(Operator::RParen.apply(1.0, 2.0), None);
    /// ```
    #[must_use]
    pub fn apply(self, lhs: f32, rhs: f32) -> Option<f32> {
        match self {
            Self::Plus => Some(lhs + rhs),
            Self::Minus => Some(lhs - rhs),
            Self::Mul => Some(lhs * rhs),
            Self::Div => Some(lhs / rhs),
            Self::LParen | Self::RParen => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Renders a token sequence as text, separating tokens with single spaces.
///
/// # Example
/// ```
/// use shunting::interpreter::token::{Operator, Token, render};
///
/// let postfix = [Token::Number(1.0), Token::Number(2.5), Token::Operator(Operator::Plus)];
/// assert_eq!(render(&postfix), "1 2.5 +");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
