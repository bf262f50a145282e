use tracing::{debug, trace};

use crate::{
    error::{Parenthesis, ParseError},
    interpreter::{parser::core::ParseResult, token::{Operator, Token}},
};

/// State of one shunting-yard pass.
///
/// Pending operators wait on `operators` together with their position in the
/// infix input, so an unmatched `(` can be reported where it was written.
pub struct ShuntingYard {
    output:    Vec<Token>,
    operators: Vec<(Operator, usize)>,
}

impl ShuntingYard {
    /// Creates an empty yard sized for an input of `capacity` tokens.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { output:    Vec::with_capacity(capacity),
               operators: Vec::new(), }
    }

    /// Sends an operand straight to the output.
    pub fn push_operand(&mut self, token: Token) {
        self.output.push(token);
    }

    /// Routes an operator token found at `position` in the infix input.
    ///
    /// # Errors
    /// Returns `MismatchedParenthesis` when `op` is a `)` without an open `(`.
    pub fn push_operator(&mut self, op: Operator, position: usize) -> ParseResult<()> {
        match op {
            Operator::LParen => {
                self.operators.push((op, position));
                Ok(())
            },
            Operator::RParen => self.close_group(position),
            Operator::Plus | Operator::Minus | Operator::Mul | Operator::Div => {
                self.push_binary(op, position);
                Ok(())
            },
        }
    }

    /// Pops every operator that binds at least as tightly as `op`, then
    /// stacks `op`.
    fn push_binary(&mut self, op: Operator, position: usize) {
        while let Some(&(top, _)) = self.operators.last() {
            match (top.precedence(), op.precedence()) {
                (Some(top_prec), Some(op_prec)) if top_prec >= op_prec => self.pop_to_output(),
                _ => break,
            }
        }
        trace!(target: "shunting::parser", operator = %op, position, "stacked operator");
        self.operators.push((op, position));
    }

    /// Unwinds the operator stack down to the matching `(` and discards it.
    fn close_group(&mut self, position: usize) -> ParseResult<()> {
        loop {
            match self.operators.pop() {
                Some((Operator::LParen, _)) => return Ok(()),
                Some((op, _)) => self.output.push(Token::Operator(op)),
                None => {
                    debug!(target: "shunting::parser", position, "opening parenthesis not found");
                    return Err(ParseError::MismatchedParenthesis { missing: Parenthesis::Opening,
                                                                   position });
                },
            }
        }
    }

    fn pop_to_output(&mut self) {
        if let Some((op, _)) = self.operators.pop() {
            trace!(target: "shunting::parser", operator = %op, "popped operator to output");
            self.output.push(Token::Operator(op));
        }
    }

    /// Drains the remaining operators and returns the postfix sequence.
    ///
    /// # Errors
    /// Returns `MismatchedParenthesis` when a `(` is still open.
    pub fn finish(mut self) -> ParseResult<Vec<Token>> {
        while let Some((op, position)) = self.operators.pop() {
            if op == Operator::LParen {
                debug!(target: "shunting::parser", position, "closing parenthesis not found");
                return Err(ParseError::MismatchedParenthesis { missing: Parenthesis::Closing,
                                                               position });
            }
            self.output.push(Token::Operator(op));
        }
        Ok(self.output)
    }
}
