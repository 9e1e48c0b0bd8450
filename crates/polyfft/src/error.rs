//! Error type for the library.
//!
//! The only failure the computation can hit is building a root-of-unity set
//! with order zero. Empty and all-zero coefficient vectors are valid zero
//! polynomials and never produce an error.

use thiserror::Error;

/// Errors returned by `polyfft`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FftError {
    /// A root-of-unity set was requested with a non-positive order.
    #[error("root-of-unity order must be positive, got {order}")]
    InvalidRootOrder {
        /// The rejected order.
        order: usize,
    },
}
