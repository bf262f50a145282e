/// Entry point of the parser.
///
/// Declares the parse result type and the `parse` function that turns an
/// infix token sequence into postfix order.
pub mod core;

/// Operator-stack state machine.
///
/// Implements the shunting-yard algorithm: the output queue, the operator
/// stack, precedence-driven popping and parenthesis matching.
pub mod shunting_yard;
