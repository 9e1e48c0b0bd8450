//! Recursive radix-2 FFT: coefficients → samples at the roots of unity.
//!
//! Every level splits `f(x) = e(x²) + x·o(x²)`, evaluates `e` and `o` on the
//! squared roots, and combines with the butterfly
//!
//! ```text
//! f(ω_k)       = e(ω_k²) + ω_k · o(ω_k²)
//! f(ω_{k+n/2}) = e(ω_k²) - ω_k · o(ω_k²)
//! ```
//!
//! Sub-results that are shorter than their slot are only repaired when they
//! have exactly one sample (broadcast). A polynomial whose even or odd part
//! has degree ≥ 1 but fewer terms than the slot needs therefore produces
//! fewer samples than the root order (e.g. five dense coefficients give four
//! samples, not eight). The same truncation applies when a caller supplies a
//! root order other than the default (see [`fft`]). Callers that need the
//! full circle should pass dense power-of-two-length inputs with the default
//! order, or compare against [`crate::naive`].

use num_complex::Complex64;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::error::FftError;
use crate::polynomial::Polynomial;
use crate::roots::RootsOfUnity;

/// Smallest power of two `≥ n` (`0` and `1` both map to `1`).
///
/// # Panics
/// Overflows (panics in debug builds) if the answer exceeds `usize::MAX`.
#[inline]
#[must_use]
pub const fn smallest_power_of_two_not_less_than(n: usize) -> usize {
    if n <= 1 {
        1
    } else {
        n.next_power_of_two()
    }
}

/// Samples of the polynomial with the given coefficients at the roots of unity.
///
/// `root_order` selects the root set; `None` uses the smallest power of two
/// that covers the polynomial's degree.
///
/// Only the default order yields a sample per root (for dense inputs). The
/// input is never padded to a supplied order, so a larger order returns fewer
/// values than roots and the values at odd positions are not evaluations at
/// any member of the set. An order below the default can return nothing at
/// all: orders `1` and `2` give an empty vector for any non-constant input.
///
/// # Errors
/// [`FftError::InvalidRootOrder`] if `root_order == Some(0)`.
pub fn fft(
    coefficients: &[Complex64],
    root_order: Option<usize>,
) -> Result<Vec<Complex64>, FftError> {
    let poly = Polynomial::new(coefficients.to_vec());
    let roots = root_order.map(RootsOfUnity::generate).transpose()?;
    Ok(fft_polynomial(&poly, roots.as_ref()))
}

/// Run the recursive FFT on `poly`.
///
/// `roots == None` derives the default set of order
/// [`smallest_power_of_two_not_less_than`]`(degree + 1)`. Zero and constant
/// polynomials return a single sample regardless of `roots`.
#[must_use]
pub fn fft_polynomial(poly: &Polynomial, roots: Option<&RootsOfUnity>) -> Vec<Complex64> {
    // Base cases
    if poly.is_zero() {
        return vec![Complex64::zero()];
    }
    if poly.is_constant() {
        return vec![poly[0]];
    }

    let owned;
    let roots = if let Some(r) = roots {
        r
    } else {
        let n = smallest_power_of_two_not_less_than(poly.degree().unsigned_abs() + 1);
        owned = RootsOfUnity::full(n);
        &owned
    };

    debug!(degree = poly.degree(), order = roots.order(), "fft");
    let samples = recurse(poly, roots);
    if samples.len() != roots.len() {
        debug!(
            samples = samples.len(),
            roots = roots.len(),
            "sample count differs from root set size"
        );
    }
    samples
}

fn recurse(poly: &Polynomial, roots: &RootsOfUnity) -> Vec<Complex64> {
    if poly.is_zero() {
        return vec![Complex64::zero()];
    }
    if poly.is_constant() {
        return vec![poly[0]];
    }

    // Squaring an even-order set repeats at the halfway point; keep one copy.
    let sub_roots = roots.squared().first_half();
    let (evens, odds) = broadcast(
        recurse(&poly.evens(), &sub_roots),
        recurse(&poly.odds(), &sub_roots),
    );
    butterfly(&evens, &odds, roots)
}

/// Stretch a single-sample side to the length of the other side.
///
/// Only length-1 results are repeated; any other mismatch is left alone and
/// the butterfly truncates to the shorter side.
fn broadcast(
    mut evens: Vec<Complex64>,
    mut odds: Vec<Complex64>,
) -> (Vec<Complex64>, Vec<Complex64>) {
    if evens.len() == 1 && odds.len() > 1 {
        evens.resize(odds.len(), evens[0]);
    }
    if odds.len() == 1 && evens.len() > 1 {
        odds.resize(evens.len(), odds[0]);
    }
    if evens.len() != odds.len() {
        trace!(evens = evens.len(), odds = odds.len(), "uneven sub-results");
    }
    (evens, odds)
}

/// `[e_k + w_k·o_k for k] ++ [e_k − w_k·o_k for k]` over the common prefix.
fn butterfly(evens: &[Complex64], odds: &[Complex64], roots: &RootsOfUnity) -> Vec<Complex64> {
    let half = evens.len().min(odds.len()).min(roots.len());
    let mut out = vec![Complex64::zero(); 2 * half];
    for (k, ((e, o), w)) in evens.iter().zip(odds).zip(roots).take(half).enumerate() {
        let t = w * o;
        out[k] = e + t;
        out[k + half] = e - t;
    }
    out
}
