use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::ops::{Add, Mul, Neg, Sub};

use crate::algebra::ring::Ring;
use crate::utils::{self, abs, hash_bits};

/// Error type for Lagrange interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpolationError {
    /// Two points share the same x-coordinate.
    DuplicateNode { x: f64 },
    /// An x-coordinate is NaN or infinite.
    NonFiniteNode { x: f64 },
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationError::DuplicateNode { x } => {
                write!(f, "duplicate interpolation node at x = {}", x)
            }
            InterpolationError::NonFiniteNode { x } => {
                write!(f, "interpolation node is not finite: x = {}", x)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InterpolationError {}

/// Univariate polynomial with `f64` coefficients.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`.
///
/// Values are always kept in canonical form: the highest stored coefficient
/// is never exactly zero, and the zero polynomial is the empty coefficient
/// vector. Equality and hashing are structural over that canonical form, so
/// `[1, 0]` and `[1]` describe the same value.
#[derive(Clone, PartialEq, Default)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// `coeffs[i]` is the coefficient of `x^i`.
    /// Trailing zeros are automatically removed.
    ///
    /// # Example
    ///
    /// ```
    /// use polyr::Polynomial;
    ///
    /// // 1 + 2x + 3x^2
    /// let p = Polynomial::new(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(p.degree(), Some(2));
    ///
    /// let q = Polynomial::new(vec![1.0, 0.0, 0.0]);
    /// assert_eq!(q.coefficients(), &[1.0]);
    /// ```
    pub fn new(coeffs: Vec<f64>) -> Self {
        let mut poly = Self { coeffs };
        poly.normalize();
        poly
    }

    /// Create a polynomial by copying a coefficient slice.
    ///
    /// The polynomial owns its own storage; later changes to `coeffs` are
    /// not observed.
    pub fn from_slice(coeffs: &[f64]) -> Self {
        Self::new(coeffs.to_vec())
    }

    /// Create the zero polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use polyr::Polynomial;
    ///
    /// let zero = Polynomial::zero();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.degree(), None);
    /// assert_eq!(zero.to_string(), "0");
    /// ```
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Create the constant polynomial `1`.
    pub fn one() -> Self {
        Self { coeffs: vec![1.0] }
    }

    /// Create a constant polynomial.
    ///
    /// # Example
    ///
    /// ```
    /// use polyr::Polynomial;
    ///
    /// let c = Polynomial::constant(5.0);
    /// assert_eq!(c.degree(), Some(0));
    /// assert_eq!(c.eval(10.0), 5.0);
    /// ```
    pub fn constant(c: f64) -> Self {
        Self::new(vec![c])
    }

    /// Create the polynomial `x`.
    pub fn x() -> Self {
        Self {
            coeffs: vec![0.0, 1.0],
        }
    }

    /// Create a monomial `c * x^n`.
    ///
    /// # Example
    ///
    /// ```
    /// use polyr::Polynomial;
    ///
    /// let m = Polynomial::monomial(3.0, 2); // 3x^2
    /// assert_eq!(m.degree(), Some(2));
    /// assert_eq!(m.eval(2.0), 12.0);
    /// ```
    pub fn monomial(c: f64, n: usize) -> Self {
        if c == 0.0 {
            return Self::zero();
        }
        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = c;
        Self { coeffs }
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial, `Some(n)` otherwise
    /// where `n` is the highest power with a non-zero coefficient.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<f64> {
        self.coeffs.last().copied()
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Get a slice of all coefficients.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Consume the polynomial and return its coefficient vector.
    pub fn into_coefficients(self) -> Vec<f64> {
        self.coeffs
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// The zero polynomial evaluates to `0.0` everywhere. NaN and infinite
    /// inputs follow ordinary IEEE 754 propagation.
    ///
    /// # Example
    ///
    /// ```
    /// use polyr::Polynomial;
    ///
    /// // p(x) = 2 + 3x
    /// let p = Polynomial::new(vec![2.0, 3.0]);
    /// assert_eq!(p.eval(2.0), 8.0);
    /// ```
    pub fn eval(&self, x: f64) -> f64 {
        // Horner's method: p(x) = a_0 + x(a_1 + x(a_2 + ... + x*a_n))
        let mut iter = self.coeffs.iter().rev();
        match iter.next() {
            None => 0.0,
            Some(&lead) => iter.fold(lead, |acc, &c| acc * x + c),
        }
    }

    /// Coefficient-wise comparison within a tolerance.
    ///
    /// Missing high coefficients count as zero, so a polynomial whose
    /// leading coefficient is tiny compares close to one of lower degree.
    /// See [`approx_eq`](crate::approx_eq) for the per-coefficient rule.
    pub fn approx_eq(&self, other: &Self, tol: f64) -> bool {
        let len = self.coeffs.len().max(other.coeffs.len());
        (0..len).all(|i| utils::approx_eq(self.coeff(i), other.coeff(i), tol))
    }

    /// Remove trailing zero coefficients.
    fn normalize(&mut self) {
        while self.coeffs.last() == Some(&0.0) {
            self.coeffs.pop();
        }
    }

    /// Combine two polynomials index-wise, treating missing high
    /// coefficients as zero.
    fn zip_with(&self, rhs: &Self, op: impl Fn(f64, f64) -> f64) -> Self {
        let max_len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..max_len)
            .map(|i| op(self.coeff(i), rhs.coeff(i)))
            .collect();

        Self::new(coeffs)
    }

    /// Polynomial multiplication using naive O(n*m) convolution.
    fn convolve(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            log::trace!("product with zero polynomial short-circuited");
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut coeffs = vec![0.0; n + m - 1];

        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }

        Self::new(coeffs)
    }

    fn scale(&self, c: f64) -> Self {
        Self::new(self.coeffs.iter().map(|&a| a * c).collect())
    }

    /// Create a polynomial from its roots: `(x - r1)(x - r2)...(x - rn)`.
    ///
    /// The empty root list gives the constant `1`.
    ///
    /// # Example
    ///
    /// ```
    /// use polyr::Polynomial;
    ///
    /// // (x - 2)(x - 5) = x^2 - 7x + 10
    /// let p = Polynomial::from_roots(&[2.0, 5.0]);
    /// assert_eq!(p.coefficients(), &[10.0, -7.0, 1.0]);
    /// assert_eq!(p.eval(2.0), 0.0);
    /// ```
    pub fn from_roots(roots: &[f64]) -> Self {
        roots
            .iter()
            .fold(Self::one(), |acc, &r| acc * Self::new(vec![-r, 1.0]))
    }

    /// Lagrange interpolation: find the unique polynomial of degree < n
    /// passing through the given points.
    ///
    /// Returns the zero polynomial for an empty point set.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::NonFiniteNode` if an x-coordinate is NaN
    /// or infinite.
    /// Returns `InterpolationError::DuplicateNode` if two x-coordinates are
    /// equal.
    ///
    /// # Example
    ///
    /// ```
    /// use polyr::Polynomial;
    ///
    /// // Find polynomial passing through (0, 1), (1, 3), (2, 7)
    /// let points = [(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)];
    /// let p = Polynomial::interpolate(&points).unwrap();
    ///
    /// for (x, y) in &points {
    ///     assert!((p.eval(*x) - y).abs() < 1e-12);
    /// }
    /// ```
    pub fn interpolate(points: &[(f64, f64)]) -> Result<Self, InterpolationError> {
        for (i, &(xi, _)) in points.iter().enumerate() {
            if !xi.is_finite() {
                log::debug!("rejecting interpolation input: node {} is {}", i, xi);
                return Err(InterpolationError::NonFiniteNode { x: xi });
            }
            if points[..i].iter().any(|&(xj, _)| xj == xi) {
                log::debug!("rejecting interpolation input: node {} repeats x = {}", i, xi);
                return Err(InterpolationError::DuplicateNode { x: xi });
            }
        }

        let result = points
            .iter()
            .enumerate()
            .map(|(i, &(xi, yi))| {
                // L_i(x) = product over j != i of (x - x_j) / (x_i - x_j)
                let mut basis = Self::one();
                let mut denom = 1.0;

                for (j, &(xj, _)) in points.iter().enumerate() {
                    if i != j {
                        basis = basis * Self::new(vec![-xj, 1.0]);
                        denom *= xi - xj;
                    }
                }

                basis * (yi / denom)
            })
            .sum();

        Ok(result)
    }

    /// Generate a random polynomial of exactly the given degree.
    ///
    /// Coefficients are drawn uniformly from `[-1, 1)`; the leading
    /// coefficient is redrawn until it is non-zero.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng>(rng: &mut R, degree: usize) -> Self {
        let mut coeffs: Vec<f64> = (0..=degree).map(|_| rng.gen_range(-1.0..1.0)).collect();
        while coeffs[degree] == 0.0 {
            coeffs[degree] = rng.gen_range(-1.0..1.0);
        }
        Self { coeffs }
    }

    /// Write a single coefficient magnitude, honoring the formatter's precision.
    fn write_coeff(f: &mut fmt::Formatter<'_>, c: f64) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, c),
            None => write!(f, "{}", c),
        }
    }
}

/* ---- Conversions ---- */

impl From<Vec<f64>> for Polynomial {
    fn from(coeffs: Vec<f64>) -> Self {
        Self::new(coeffs)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coeffs: &[f64]) -> Self {
        Self::from_slice(coeffs)
    }
}

impl<const N: usize> From<[f64; N]> for Polynomial {
    fn from(coeffs: [f64; N]) -> Self {
        Self::new(coeffs.to_vec())
    }
}

impl FromIterator<f64> for Polynomial {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/* ---- Arithmetic operators ---- */

impl Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Self;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let coeffs = self.coeffs.into_iter().map(|c| -c).collect();
        Self { coeffs }
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl Sub<&Polynomial> for Polynomial {
    type Output = Self;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.convolve(&rhs)
    }
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Self;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        self.convolve(rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        self.convolve(rhs)
    }
}

/// Scalar multiplication: polynomial * f64
impl Mul<f64> for Polynomial {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Sum for Polynomial {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, p| acc + p)
    }
}

impl Ring for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn one() -> Self {
        Polynomial::one()
    }

    fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }
}

/* ---- Hashing and formatting ---- */

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.coeffs.len());
        for &c in &self.coeffs {
            state.write_u64(hash_bits(c));
        }
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Polynomial").field(&self.coeffs).finish()
    }
}

/// Renders `c_n x^n + ... + c_1 x + c_0` in descending degree order.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate().rev() {
            if coeff == 0.0 {
                continue;
            }

            let magnitude = abs(coeff);
            match (first, coeff < 0.0) {
                (true, true) => f.write_str("-")?,
                (true, false) => {}
                (false, true) => f.write_str(" - ")?,
                (false, false) => f.write_str(" + ")?,
            }
            first = false;

            if i == 0 || magnitude != 1.0 {
                Self::write_coeff(f, magnitude)?;
            }
            match i {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Polynomial {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Serialize as the coefficient sequence
        serde::Serialize::serialize(&self.coeffs, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Polynomial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let coeffs = <Vec<f64> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::new(coeffs))
    }
}
