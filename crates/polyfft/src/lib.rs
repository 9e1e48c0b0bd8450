//! Complex polynomials, roots of unity, and a recursive radix-2 FFT.
//!
//! - [`Polynomial`]: coefficient vector with degree tracking and Horner evaluation.
//! - [`RootsOfUnity`]: the `n`-th roots of unity with squaring/halving.
//! - [`fft()`]: coefficients → samples at the roots of unity in **O(n log n)**.
//! - [`naive`]: **O(n²)** reference evaluation used to cross-check the FFT.
//!
//! ```
//! use polyfft::{fft, Complex64};
//!
//! // x² at the 4th roots of unity {1, i, -1, -i}.
//! let coeffs = [0.0, 0.0, 1.0].map(|c| Complex64::new(c, 0.0));
//! let samples = fft(&coeffs, None)?;
//! assert_eq!(samples.len(), 4);
//! assert_eq!(samples[0], Complex64::new(1.0, 0.0));
//! # Ok::<(), polyfft::FftError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown
)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod fft;
pub mod naive;
pub mod polynomial;
pub mod roots;

pub use error::FftError;
pub use fft::{fft, fft_polynomial, smallest_power_of_two_not_less_than};
pub use polynomial::Polynomial;
pub use roots::RootsOfUnity;

/// Complex scalar used for coefficients, roots, and samples.
pub use num_complex::Complex64;

/// Commonly-used items for quick imports.
///
/// ```rust
/// use polyfft::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        error::FftError,
        fft::{fft, fft_polynomial},
        polynomial::Polynomial,
        roots::RootsOfUnity,
        Complex64,
    };
}
