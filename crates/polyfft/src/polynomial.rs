//! Dense univariate polynomials over `Complex64`.
//!
//! Coefficient `i` is the coefficient of `xⁱ`. The stored vector is kept as
//! given (trailing zeros included) so that `add` can report the padded length;
//! the degree is computed once at construction and ignores trailing zeros.

use core::ops::{Add, Index};

use num_complex::Complex64;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// A polynomial in coefficient representation.
///
/// Equality ignores trailing zero coefficients, so `[1, 0]` and `[1]` compare
/// equal, as do `[]` and `[0]`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<Complex64>", into = "Vec<Complex64>")]
pub struct Polynomial {
    coefficients: Vec<Complex64>,
    degree: isize,
}

impl Polynomial {
    /// Build a polynomial from its coefficients (lowest power first).
    #[must_use]
    pub fn new(coefficients: Vec<Complex64>) -> Self {
        let degree = leading_degree(&coefficients);
        Self {
            coefficients,
            degree,
        }
    }

    /// Build a polynomial with real coefficients.
    #[must_use]
    pub fn from_real(coefficients: &[f64]) -> Self {
        coefficients.iter().map(|&c| Complex64::new(c, 0.0)).collect()
    }

    /// The zero polynomial (empty coefficient vector).
    #[inline]
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Vec::new())
    }

    /// The constant polynomial `c`.
    #[inline]
    #[must_use]
    pub fn constant(c: Complex64) -> Self {
        Self::new(vec![c])
    }

    /// Index of the highest nonzero coefficient; `-1` for the zero polynomial.
    #[inline]
    #[must_use]
    pub const fn degree(&self) -> isize {
        self.degree
    }

    /// Stored coefficients, trailing zeros included.
    #[inline]
    #[must_use]
    pub fn coefficients(&self) -> &[Complex64] {
        &self.coefficients
    }

    /// Number of stored coefficients.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether no coefficients are stored at all.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Degree `-1`.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.degree < 0
    }

    /// Degree `0`.
    #[inline]
    #[must_use]
    pub const fn is_constant(&self) -> bool {
        self.degree == 0
    }

    /// Coefficients up to and including the leading one.
    #[inline]
    fn terms(&self) -> &[Complex64] {
        &self.coefficients[..self.term_count()]
    }

    #[inline]
    fn term_count(&self) -> usize {
        usize::try_from(self.degree + 1).unwrap_or(0)
    }

    /// Evaluate at `x` with Horner's rule: `c₀ + x(c₁ + x(c₂ + …))`.
    ///
    /// Uses `degree + 1` multiply-adds; the zero polynomial evaluates to `0`.
    #[must_use]
    pub fn evaluate(&self, x: Complex64) -> Complex64 {
        let mut acc = Complex64::zero();
        for &c in self.terms().iter().rev() {
            acc = c + x * acc;
        }
        acc
    }

    /// Strip trailing zero coefficients in place.
    pub fn normalize(&mut self) {
        self.coefficients.truncate(self.term_count());
    }

    /// By-value [`normalize`](Self::normalize).
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Zero-pad to at least `len` coefficients. The degree is unchanged.
    #[must_use]
    pub fn padded(&self, len: usize) -> Self {
        let mut coefficients = self.coefficients.clone();
        if coefficients.len() < len {
            coefficients.resize(len, Complex64::zero());
        }
        Self {
            coefficients,
            degree: self.degree,
        }
    }

    /// Coefficients at even indices `0, 2, 4, …`.
    #[must_use]
    pub fn evens(&self) -> Self {
        self.coefficients.iter().step_by(2).copied().collect()
    }

    /// Coefficients at odd indices `1, 3, 5, …`.
    #[must_use]
    pub fn odds(&self) -> Self {
        self.coefficients.iter().skip(1).step_by(2).copied().collect()
    }
}

#[allow(clippy::cast_possible_wrap)]
fn leading_degree(coefficients: &[Complex64]) -> isize {
    coefficients
        .iter()
        .rposition(|c| !c.is_zero())
        .map_or(-1, |i| i as isize)
}

impl Default for Polynomial {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Vec<Complex64>> for Polynomial {
    #[inline]
    fn from(coefficients: Vec<Complex64>) -> Self {
        Self::new(coefficients)
    }
}

impl From<Polynomial> for Vec<Complex64> {
    #[inline]
    fn from(p: Polynomial) -> Self {
        p.coefficients
    }
}

impl FromIterator<Complex64> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Complex64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Index<usize> for Polynomial {
    type Output = Complex64;

    #[inline]
    fn index(&self, i: usize) -> &Complex64 {
        &self.coefficients[i]
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.degree == other.degree && self.terms() == other.terms()
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// Pad the shorter operand with zeros and add element-wise. The result
    /// has `max(len)` coefficients and is not normalized.
    fn add(self, rhs: &Polynomial) -> Polynomial {
        let len = self.len().max(rhs.len());
        let (lhs, rhs) = (self.padded(len), rhs.padded(len));
        lhs.coefficients
            .iter()
            .zip(&rhs.coefficients)
            .map(|(a, b)| a + b)
            .collect()
    }
}

impl Add for Polynomial {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(c: &[f64]) -> Polynomial {
        Polynomial::from_real(c)
    }

    #[test]
    fn degree_ignores_trailing_zeros() {
        assert_eq!(poly(&[1.0]).degree(), 0);
        assert_eq!(poly(&[0.0, 1.0]).degree(), 1);
        assert_eq!(poly(&[0.0, 0.0, 1.0]).degree(), 2);
        assert_eq!(poly(&[0.0, 1.0, 1.0]).degree(), 2);
        assert_eq!(poly(&[1.0, 0.0]).degree(), 0);
        assert_eq!(poly(&[1.0, 0.0, 0.0]).degree(), 0);
        assert_eq!(poly(&[0.0]).degree(), -1);
        assert_eq!(Polynomial::zero().degree(), -1);
    }

    #[test]
    fn zero_and_constant_flags() {
        assert!(Polynomial::default().is_zero());
        assert!(poly(&[]).is_zero());
        assert!(poly(&[0.0, 0.0]).is_zero());
        assert!(poly(&[5.0, 0.0]).is_constant());
        assert_eq!(Polynomial::constant(Complex64::new(5.0, 0.0)), poly(&[5.0, 0.0]));
        assert!(Polynomial::constant(Complex64::zero()).is_zero());
        assert!(!poly(&[5.0, 1.0]).is_constant());
    }

    #[test]
    fn equality_ignores_padding() {
        let one = poly(&[1.0]);
        assert_eq!(one, poly(&[1.0, 0.0]));
        assert_eq!(one, poly(&[1.0, 0.0, 0.0]));
        assert_eq!(poly(&[1.0, 0.0]), poly(&[1.0, 0.0, 0.0]));
        assert_eq!(poly(&[]), poly(&[0.0]));
        assert_ne!(one, poly(&[0.0, 1.0]));
    }

    #[test]
    fn add_pads_to_longer_operand() {
        let x = poly(&[0.0, 1.0]);
        let square = poly(&[0.0, 0.0, 1.0]);
        let expected = poly(&[0.0, 1.0, 1.0]);

        assert_eq!(&square + &x, expected);
        assert_eq!(&x + &square, expected);
        assert_eq!((&x + &square).len(), 3);

        // (1 + 2x) + (3 + 2x + 5x²) = 4 + 4x + 5x²
        assert_eq!(poly(&[1.0, 2.0]) + poly(&[3.0, 2.0, 5.0]), poly(&[4.0, 4.0, 5.0]));
    }

    #[test]
    fn add_keeps_cancelled_terms_until_normalized() {
        let sum = poly(&[1.0, 1.0]) + poly(&[0.0, -1.0]);
        assert_eq!(sum.len(), 2);
        assert_eq!(sum.degree(), 0);
        assert_eq!(sum.normalized().len(), 1);
    }

    #[test]
    fn padded_matches_lengths() {
        let one = poly(&[1.0]);
        let p = one.padded(2);
        assert_eq!(p.len(), 2);
        assert_eq!(p, one);
        assert_eq!(one.padded(0).len(), 1);
    }

    #[test]
    fn normalize_strips_trailing_zeros() {
        let mut p = poly(&[1.0, 0.0, 0.0]);
        p.normalize();
        assert_eq!(p.coefficients(), poly(&[1.0]).coefficients());

        let mut z = poly(&[0.0, 0.0]);
        z.normalize();
        assert!(z.is_empty());
    }

    #[test]
    fn evaluation_on_real_grid() {
        let zero = poly(&[0.0]);
        let one = poly(&[1.0]);
        let x = poly(&[0.0, 1.0]);
        let square = poly(&[0.0, 0.0, 1.0]);
        for i in -50..50 {
            let t = f64::from(i) / 5.0;
            let z = Complex64::new(t, 0.0);
            assert_eq!(zero.evaluate(z), Complex64::zero());
            assert_eq!(one.evaluate(z), Complex64::new(1.0, 0.0));
            assert_eq!(x.evaluate(z), z);
            assert_eq!(square.evaluate(z), z * z);
        }
    }

    #[test]
    fn evens_and_odds_split() {
        let p = poly(&[0.0, 1.0, 1.0]);
        assert_eq!(p.evens(), poly(&[0.0, 1.0]));
        assert_eq!(p.odds(), poly(&[1.0]));

        let q = poly(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q.evens(), poly(&[1.0, 3.0]));
        assert_eq!(q.odds(), poly(&[2.0, 4.0]));

        assert!(poly(&[7.0]).odds().is_empty());
    }

    #[test]
    fn serde_roundtrips_through_coefficient_list() {
        let p = Polynomial::new(vec![Complex64::new(1.0, -2.0), Complex64::new(0.0, 0.5)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[[1.0,-2.0],[0.0,0.5]]");
        let back: Polynomial = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.degree(), 1);
    }
}
