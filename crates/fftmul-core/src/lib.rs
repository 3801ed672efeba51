//! # fftmul-core
//!
//! Multiplication of arbitrarily large decimal integers with a complex FFT.
//! Digits become polynomial coefficients, the convolution is computed in the
//! frequency domain, and the product is rebuilt with rounding and carries.
//!
//! Exactness is bounded by double-precision noise in the transform; see
//! [`constants::PRECISION_WARN_DIGITS`].

pub mod codec;
pub mod complex;
pub mod constants;
pub mod digits;
pub mod error;
pub mod fft;
pub mod multiply;
pub mod options;

// Re-exports
pub use complex::Complex;
pub use constants::{exit_codes, DEFAULT_TOLERANCE, PRECISION_WARN_DIGITS};
pub use digits::DigitSequence;
pub use error::MulError;
pub use fft::{fft_forward, fft_inverse, transform, Direction};
pub use multiply::{multiply, multiply_batch, multiply_with, square_with, MulPlan};
pub use options::MulOptions;

/// Multiply two decimal numbers given as text.
///
/// Convenience wrapper that parses both operands and renders the product.
///
/// # Example
/// ```
/// assert_eq!(fftmul_core::multiply_str("123", "456").unwrap(), "56088");
/// assert_eq!(fftmul_core::multiply_str("", "456").unwrap(), "0");
/// ```
pub fn multiply_str(a: &str, b: &str) -> Result<String, MulError> {
    let a: DigitSequence = a.parse()?;
    let b: DigitSequence = b.parse()?;
    Ok(multiply(&a, &b).to_string())
}
