// Tolerance used by every geometric predicate. Values closer to zero than this
// are treated as exactly zero.
pub const EPSILON: f64 = 1e-10;

/// Checks if `v` is zero within [`EPSILON`].
#[inline]
pub fn is_zero(v: f64) -> bool {
    v.abs() < EPSILON
}

/// Returns `0.0` if `v` is zero within [`EPSILON`] and `v` otherwise.
///
/// Used to snap dot products and ray parameters before sign checks.
#[inline]
pub fn align_zero(v: f64) -> f64 {
    if is_zero(v) {
        0.0
    } else {
        v
    }
}

/// Checks if `a` and `b` are both strictly positive or both strictly negative.
#[inline]
pub fn compare_sign(a: f64, b: f64) -> bool {
    (a < 0.0 && b < 0.0) || (a > 0.0 && b > 0.0)
}
