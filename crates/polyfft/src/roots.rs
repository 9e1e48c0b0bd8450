//! Sets of complex roots of unity.
//!
//! A set of order `n` holds roots `ω_n^k = exp(2πik/n)`. Each member is kept
//! together with its exponent `k`, so squaring and deduplication work on
//! exponents (`k ↦ 2k mod n`) rather than on floating-point values.
//!
//! The FFT only ever asks for `squared().first_half()`:
//! - squaring a full even-order set collapses it onto the order-`n/2` set,
//! - squaring the first half of an order-`2m` set yields the full order-`m` set,
//! - `first_half` then trims positionally.

use core::f64::consts::PI;
use core::ops::Index;

use num_complex::Complex64;

use crate::error::FftError;

/// An ordered set of `n`-th roots of unity.
#[derive(Clone, Debug, PartialEq)]
pub struct RootsOfUnity {
    /// Every member is an `order`-th root of unity.
    order: usize,
    /// Member `i` is `exp(2πi · exponents[i] / order)`.
    exponents: Vec<usize>,
    roots: Vec<Complex64>,
}

impl RootsOfUnity {
    /// All `n` roots of order `n` in increasing angle order, starting at `1`.
    ///
    /// # Errors
    /// [`FftError::InvalidRootOrder`] if `n == 0`.
    pub fn generate(n: usize) -> Result<Self, FftError> {
        if n == 0 {
            return Err(FftError::InvalidRootOrder { order: n });
        }
        Ok(Self::full(n))
    }

    /// Caller guarantees `n > 0`.
    pub(crate) fn full(n: usize) -> Self {
        debug_assert!(n > 0, "root order must be positive");
        Self::from_exponents(n, (0..n).collect())
    }

    fn from_exponents(order: usize, exponents: Vec<usize>) -> Self {
        let roots = exponents.iter().map(|&k| root(k, order)).collect();
        Self {
            order,
            exponents,
            roots,
        }
    }

    /// Square every member and keep each distinct root once.
    ///
    /// For an even order the squares are roots of order `n/2`, kept in
    /// first-seen order. For an odd order squaring permutes the set and the
    /// order stays `n`; the squares come back in increasing angle order, so
    /// a full odd-order set squares to itself.
    #[must_use]
    pub fn squared(&self) -> Self {
        let n = self.order;
        let (order, squares): (usize, Vec<usize>) = if n % 2 == 0 {
            let half = n / 2;
            (half, self.exponents.iter().map(|&k| k % half).collect())
        } else {
            let mut squares: Vec<usize> = self.exponents.iter().map(|&k| (2 * k) % n).collect();
            squares.sort_unstable();
            (n, squares)
        };

        let mut seen = vec![false; order];
        let exponents = squares
            .into_iter()
            .filter(|&k| !std::mem::replace(&mut seen[k], true))
            .collect();
        Self::from_exponents(order, exponents)
    }

    /// The first `⌊len/2⌋` members, order preserved.
    #[must_use]
    pub fn first_half(&self) -> Self {
        let middle = self.len() / 2;
        Self {
            order: self.order,
            exponents: self.exponents[..middle].to_vec(),
            roots: self.roots[..middle].to_vec(),
        }
    }

    /// The `n` in "`n`-th roots of unity".
    #[inline]
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Number of members; equals [`order`](Self::order) unless halved.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    /// Only a halved order-1 set is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Members as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.roots
    }

    /// Exponent `k` of each member `exp(2πik/order)`.
    #[inline]
    #[must_use]
    pub fn exponents(&self) -> &[usize] {
        &self.exponents
    }

    /// Iterate over the members.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Complex64> {
        self.roots.iter()
    }
}

/// `exp(2πik/n)` on the unit circle.
#[inline]
#[allow(clippy::cast_precision_loss)]
fn root(k: usize, n: usize) -> Complex64 {
    Complex64::cis(2.0 * PI * k as f64 / n as f64)
}

impl Index<usize> for RootsOfUnity {
    type Output = Complex64;

    #[inline]
    fn index(&self, i: usize) -> &Complex64 {
        &self.roots[i]
    }
}

impl<'a> IntoIterator for &'a RootsOfUnity {
    type Item = &'a Complex64;
    type IntoIter = core::slice::Iter<'a, Complex64>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.roots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[track_caller]
    fn assert_close(actual: &[Complex64], expected: &[Complex64]) {
        assert_eq!(actual.len(), expected.len(), "length mismatch");
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).norm() < EPS, "index {i}: {a} != {e}");
        }
    }

    #[test]
    fn order_zero_is_rejected() {
        assert_eq!(
            RootsOfUnity::generate(0),
            Err(FftError::InvalidRootOrder { order: 0 })
        );
    }

    #[test]
    fn small_orders_match_known_roots() {
        let r1 = RootsOfUnity::generate(1).unwrap();
        assert_eq!(r1.as_slice(), &[c(1.0, 0.0)]);

        let r2 = RootsOfUnity::generate(2).unwrap();
        assert_close(r2.as_slice(), &[c(1.0, 0.0), c(-1.0, 0.0)]);

        let r4 = RootsOfUnity::generate(4).unwrap();
        assert_close(
            r4.as_slice(),
            &[c(1.0, 0.0), c(0.0, 1.0), c(-1.0, 0.0), c(0.0, -1.0)],
        );
    }

    #[test]
    fn every_member_is_an_nth_root() {
        for n in 1..=16usize {
            let r = RootsOfUnity::generate(n).unwrap();
            assert_eq!(r.len(), n);
            assert_eq!(r.order(), n);
            for z in &r {
                let zn = z.powu(u32::try_from(n).unwrap());
                assert!((zn - c(1.0, 0.0)).norm() < 1e-9, "n={n}: {z}^n = {zn}");
            }
        }
    }

    #[test]
    fn squaring_even_order_halves_the_set() {
        let r8 = RootsOfUnity::generate(8).unwrap();
        let sq = r8.squared();
        assert_eq!(sq.order(), 4);
        assert_eq!(sq.exponents(), &[0, 1, 2, 3]);
        assert_close(sq.as_slice(), RootsOfUnity::generate(4).unwrap().as_slice());

        // Squares of the members really are the members of the squared set.
        for (z, s) in r8.iter().zip(sq.iter().cycle()) {
            assert!((z * z - s).norm() < EPS);
        }
    }

    #[test]
    fn squaring_keeps_no_duplicates() {
        let sq = RootsOfUnity::generate(4).unwrap().squared();
        assert_eq!(sq.len(), 2);
        assert_close(sq.as_slice(), &[c(1.0, 0.0), c(-1.0, 0.0)]);

        let one = RootsOfUnity::generate(2).unwrap().squared();
        assert_eq!(one.as_slice(), &[c(1.0, 0.0)]);
    }

    #[test]
    fn squaring_odd_order_keeps_angle_order() {
        let sq = RootsOfUnity::generate(3).unwrap().squared();
        assert_eq!(sq.order(), 3);
        assert_eq!(sq.exponents(), &[0, 1, 2]);

        let r5 = RootsOfUnity::generate(5).unwrap();
        let sq = r5.squared();
        assert_eq!(sq, r5);
        assert_eq!(sq.first_half().exponents(), &[0, 1]);

        // A partial odd-order set squares onto the doubled exponents, sorted.
        let sq = r5.first_half().squared();
        assert_eq!(sq.exponents(), &[0, 2]);
        assert_close(sq.as_slice(), &[c(1.0, 0.0), r5[2]]);
    }

    #[test]
    fn first_half_trims_positionally() {
        let r2 = RootsOfUnity::generate(2).unwrap();
        assert_eq!(r2.first_half().len(), 1);
        assert_eq!(r2.first_half()[0], c(1.0, 0.0));

        let r4 = RootsOfUnity::generate(4).unwrap();
        let h = r4.first_half();
        assert_eq!(h.len(), 2);
        assert_eq!(h.order(), 4);
        assert_close(h.as_slice(), &[c(1.0, 0.0), c(0.0, 1.0)]);

        assert!(RootsOfUnity::generate(1).unwrap().first_half().is_empty());
    }

    #[test]
    fn squared_half_chain_shrinks_to_one() {
        // The top level keeps a quarter of the full set; every level below halves.
        let mut r = RootsOfUnity::generate(64).unwrap().squared().first_half();
        assert_eq!((r.order(), r.len()), (32, 16));
        let mut lens = vec![r.len()];
        while r.len() > 1 {
            r = r.squared().first_half();
            lens.push(r.len());
        }
        assert_eq!(lens, vec![16, 8, 4, 2, 1]);
    }

    #[test]
    fn clone_is_equal() {
        let r = RootsOfUnity::generate(4).unwrap();
        assert_eq!(r.clone(), r);
    }
}
