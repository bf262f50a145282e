use crate::{error::RuntimeError, interpreter::{evaluator::core::EvalResult, token::Operator}};

/// Intermediate values of one postfix evaluation.
#[derive(Debug, Default)]
pub struct OperandStack {
    values: Vec<f32>,
}

impl OperandStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f32) {
        self.values.push(value);
    }

    /// Pops the two operands of a binary operator.
    ///
    /// The right operand is on top of the stack, the left one below it.
    ///
    /// # Parameters
    /// - `operator`: The operator being applied, for error reporting.
    /// - `position`: Index of the operator in the postfix input.
    ///
    /// # Returns
    /// `(left, right)` on success.
    ///
    /// # Errors
    /// `MissingOperand` if fewer than two values are stacked. The stack is
    /// left untouched in that case.
    pub fn pop_operands(&mut self, operator: Operator, position: usize) -> EvalResult<(f32, f32)> {
        if self.values.len() < 2 {
            return Err(RuntimeError::MissingOperand { operator, position });
        }
        match (self.values.pop(), self.values.pop()) {
            (Some(right), Some(left)) => Ok((left, right)),
            _ => Err(RuntimeError::MissingOperand { operator, position }),
        }
    }

    /// The value on top of the stack, if any.
    #[must_use]
    pub fn top(&self) -> Option<f32> {
        self.values.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
