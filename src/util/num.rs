/// Default relative tolerance used for approximate comparisons.
pub const REL_TOLERANCE: f32 = 1e-5;
/// Default absolute tolerance used for approximate comparisons.
pub const ABS_TOLERANCE: f32 = 1e-5;

/// Checks whether two values are equal within a tolerance.
///
/// The values match when their difference is at most `abs_tolerance`, or at
/// most `rel_tolerance` times the larger magnitude. Equal infinities match;
/// NaN never matches anything, including itself.
///
/// ## Parameters
/// - `a`, `b`: The values to compare.
/// - `rel_tolerance`: Allowed difference relative to the larger magnitude.
/// - `abs_tolerance`: Allowed absolute difference.
///
/// ## Example
/// ```
/// use shunting::util::num::{ABS_TOLERANCE, REL_TOLERANCE, approx_eq};
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, REL_TOLERANCE, ABS_TOLERANCE));
/// assert!(approx_eq(f32::INFINITY, f32::INFINITY, REL_TOLERANCE, ABS_TOLERANCE));
/// assert!(!approx_eq(f32::NAN, f32::NAN, REL_TOLERANCE, ABS_TOLERANCE));
/// assert!(!approx_eq(1.0, 1.1, REL_TOLERANCE, ABS_TOLERANCE));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn approx_eq(a: f32, b: f32, rel_tolerance: f32, abs_tolerance: f32) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    if a.is_infinite() || b.is_infinite() {
        return a == b;
    }

    let diff = (a - b).abs();
    diff <= abs_tolerance || diff <= rel_tolerance * a.abs().max(b.abs())
}
