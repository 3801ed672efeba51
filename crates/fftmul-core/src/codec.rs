//! Conversion between digit sequences and complex coefficient vectors.
//!
//! Encoding is a zero-padded copy of the digits into the real axis. Decoding
//! undoes the floating-point noise left by the inverse transform: each
//! coefficient is snapped to an integer under a tolerance rule, carries are
//! propagated upward, and leading zeros are stripped.

use tracing::debug;

use crate::complex::Complex;
use crate::constants::RADIX;
use crate::digits::DigitSequence;

/// Encode `digits` into a coefficient vector of length `len`.
///
/// Index `i` holds digit `i` (least significant first) on the real axis; the
/// tail is zero so the cyclic convolution never wraps into live positions.
///
/// # Panics
///
/// Panics if `len` is smaller than the number of digits.
#[must_use]
pub fn encode(digits: &DigitSequence, len: usize) -> Vec<Complex> {
    assert!(
        len >= digits.len(),
        "coefficient vector of length {len} cannot hold {} digits",
        digits.len()
    );
    let mut coeffs = Vec::with_capacity(len);
    coeffs.extend(
        digits
            .as_lsd_slice()
            .iter()
            .map(|&d| Complex::from_real(f64::from(d))),
    );
    coeffs.resize(len, Complex::ZERO);
    coeffs
}

/// Snap one noisy coefficient to a non-negative integer.
///
/// Negative values and values under `tolerance` are zero. Values in
/// `[tolerance, 1)` are one. Everything else rounds to the nearest integer.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_coefficient(value: f64, tolerance: f64) -> u64 {
    if value < 0.0 || value < tolerance {
        0
    } else if value < 1.0 {
        1
    } else {
        value.round() as u64
    }
}

/// Decode inverse-transform output into a digit sequence.
///
/// Carries that run past the end of `coeffs` are kept as extra
/// most-significant digits. The result has no leading zeros; an all-zero
/// input decodes to the single digit `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn decode(coeffs: &[Complex], tolerance: f64) -> DigitSequence {
    let mut digits = Vec::with_capacity(coeffs.len() + 1);
    let mut carry: u64 = 0;

    for c in coeffs {
        carry += round_coefficient(c.re, tolerance);
        digits.push((carry % RADIX) as u8);
        carry /= RADIX;
    }

    if carry > 0 {
        debug!(
            carry,
            positions = coeffs.len(),
            "carry overflowed coefficient vector, extending output"
        );
        while carry > 0 {
            digits.push((carry % RADIX) as u8);
            carry /= RADIX;
        }
    }

    match digits.iter().rposition(|&d| d != 0) {
        Some(top) => {
            digits.truncate(top + 1);
            DigitSequence::from_lsd_first(digits)
        }
        None => DigitSequence::zero(),
    }
}
