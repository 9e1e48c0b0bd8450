//! Naive **O(n²)** reference evaluation.
//!
//! Slow but obviously correct; tests, benches, and the CLI `--check` flag
//! compare the FFT against these.

use num_complex::Complex64;
use num_traits::Zero;

use crate::polynomial::Polynomial;
use crate::roots::RootsOfUnity;

/// Horner evaluation at every member of `roots`: `y_k = p(ω_k)`.
#[must_use]
pub fn evaluate_at_roots(poly: &Polynomial, roots: &RootsOfUnity) -> Vec<Complex64> {
    roots.iter().map(|&w| poly.evaluate(w)).collect()
}

/// `Σ cᵢ·xⁱ` with the powers of `x` built up explicitly.
#[must_use]
pub fn evaluate_power_sum(poly: &Polynomial, x: Complex64) -> Complex64 {
    let mut acc = Complex64::zero();
    let mut pow = Complex64::new(1.0, 0.0);
    for &c in poly.coefficients() {
        acc += c * pow;
        pow *= x;
    }
    acc
}

/// Largest `|aᵢ − bᵢ|` over the common prefix (`0.0` if either is empty).
#[must_use]
pub fn max_abs_error(a: &[Complex64], b: &[Complex64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}
