/// Core evaluation logic.
///
/// Walks a postfix token sequence once, applying each operator to the
/// operands below it, and produces the final number.
pub mod core;

/// Operand stack.
///
/// A last-in-first-out store of intermediate values with checked pops that
/// report which operator ran short of operands.
pub mod stack;
