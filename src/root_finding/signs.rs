//! Sign utilities for root-finding algorithms.
//! - `strict_sign_change` : `true` if one value is < 0 and the other > 0
//! - `same_sign`          : `true` if values share the same sign bit

/// Returns `true` if `x` and `y` are nonzero with opposite signs.
///
/// Same truth table as `x * y < 0.0`, without the product, so values near
/// `f64::MIN_POSITIVE` cannot underflow to zero. NaN never counts.
#[inline]
pub(crate) fn strict_sign_change(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}


/// Returns `true` if `x` and `y` have the same sign.
#[inline]
pub(crate) fn same_sign(x: f64, y: f64) -> bool {
    x.is_sign_positive() == y.is_sign_positive()
}
