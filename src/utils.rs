/// Absolute value that does not depend on `std`'s float intrinsics.
#[inline]
pub(crate) fn abs(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & !(1 << 63))
}

/// Bit pattern used when hashing a coefficient.
///
/// `-0.0` and `+0.0` compare equal, so both map to the bits of `+0.0`.
/// Every NaN maps to the bits of `f64::NAN`.
#[inline]
pub(crate) fn hash_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

/// Check whether `a` and `b` agree within `tol`.
///
/// The tolerance is absolute for values of magnitude at most 1 and relative
/// to the larger magnitude otherwise. Equal infinities compare equal; NaN
/// never does.
///
/// # Example
///
/// ```
/// use polyr::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12));
/// assert!(approx_eq(1e12 + 1.0, 1e12, 1e-9));
/// assert!(!approx_eq(1.0, 1.1, 1e-3));
/// assert!(!approx_eq(f64::NAN, f64::NAN, 1.0));
/// ```
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    if a == b {
        return true;
    }
    if !a.is_finite() || !b.is_finite() {
        return false;
    }

    let scale = abs(a).max(abs(b)).max(1.0);
    abs(a - b) <= tol * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abs_values() {
        assert_eq!(abs(-2.5), 2.5);
        assert_eq!(abs(2.5), 2.5);
        assert_eq!(abs(-0.0).to_bits(), 0.0f64.to_bits());
        assert_eq!(abs(f64::NEG_INFINITY), f64::INFINITY);
    }

    #[test]
    fn hash_bits_signed_zero() {
        assert_eq!(hash_bits(-0.0), hash_bits(0.0));
        assert_ne!(hash_bits(1.0), hash_bits(-1.0));
    }

    #[test]
    fn hash_bits_nan() {
        let other_nan = f64::from_bits(f64::NAN.to_bits() | 1);
        assert!(other_nan.is_nan());
        assert_eq!(hash_bits(other_nan), hash_bits(f64::NAN));
    }

    #[test]
    fn approx_small_values() {
        assert!(approx_eq(1e-10, 0.0, 1e-9));
        assert!(!approx_eq(1e-8, 0.0, 1e-9));
    }

    #[test]
    fn approx_large_values_relative() {
        assert!(approx_eq(1.0e15, 1.0e15 + 1.0, 1e-12));
        assert!(!approx_eq(1.0e15, 1.001e15, 1e-12));
    }

    #[test]
    fn approx_infinities() {
        assert!(approx_eq(f64::INFINITY, f64::INFINITY, 0.0));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY, 1.0));
        assert!(!approx_eq(f64::INFINITY, 1e308, 1.0));
    }
}
