//! Floating point tolerance helpers shared by every intersection routine.

/// Values closer to zero than this are treated as zero.
pub const EPSILON: f64 = 1e-10;

/// Returns true if `x` is within [`EPSILON`] of zero.
#[inline]
pub fn is_zero(x: f64) -> bool {
    x.abs() < EPSILON
}

/// Snaps `x` to exactly `0.0` when it is within [`EPSILON`] of zero.
///
/// Lets callers compare signs (`a * b > 0.0`) without round-off noise
/// flipping the result.
#[inline]
pub fn align_zero(x: f64) -> f64 {
    if is_zero(x) {
        0.0
    } else {
        x
    }
}
