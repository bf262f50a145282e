/// Numeric comparison helpers.
///
/// This module provides tolerance-based comparison for single-precision
/// results. Decimal literals such as `12.34` have no exact `f32`
/// representation, so results are compared within a tolerance rather than
/// bit for bit.
pub mod num;
