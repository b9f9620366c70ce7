use core::ops::{Add, Mul, Neg, Sub};

/// A commutative ring with identity.
///
/// This trait assumes:
/// - (R, +) is an abelian group with identity `zero()`
/// - (R, ·) is a commutative monoid with identity `one()`
/// - multiplication distributes over addition.
///
/// For floating-point carriers these laws hold only up to rounding, so the
/// bounds ask for `PartialEq` rather than `Eq`.
pub trait Ring:
    Sized
    + Clone
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Raise to a non-negative integer power using square-and-multiply.
    ///
    /// `x.pow(0)` is `one()` for every `x`, including zero.
    ///
    /// # Example
    ///
    /// ```
    /// use polyr::{Polynomial, Ring};
    ///
    /// // (x + 1)^2 = x^2 + 2x + 1
    /// let p = Polynomial::new(vec![1.0, 1.0]);
    /// assert_eq!(p.pow(2), Polynomial::new(vec![1.0, 2.0, 1.0]));
    /// ```
    fn pow(&self, exp: u32) -> Self {
        let mut base = self.clone();
        let mut result = Self::one();

        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * base.clone();
            }
            e >>= 1;
            if e > 0 {
                base = base.clone() * base;
            }
        }
        result
    }
}

impl Ring for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }
}
