//! FFT multiplication of decimal digit sequences.
//!
//! Pipeline: encode both operands, forward transform, pointwise product,
//! inverse transform, decode. Every call owns its working vectors and drops
//! them on return.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::codec::{decode, encode};
use crate::complex::Complex;
use crate::constants::PRECISION_WARN_DIGITS;
use crate::digits::DigitSequence;
use crate::fft::{fft_forward, fft_inverse};
use crate::options::MulOptions;

/// Sizing of one multiplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulPlan {
    /// Coefficient vector length, a power of two `>= len_a + len_b`.
    pub transform_len: usize,
    /// `log2(transform_len)`, the number of butterfly stages.
    pub stages: u32,
    /// Bytes held by the two working vectors.
    pub working_bytes: usize,
    /// Combined operand length in digits.
    pub total_digits: usize,
}

impl MulPlan {
    /// Plan a multiplication of operands with `len_a` and `len_b` digits.
    ///
    /// Returns `None` when either operand is empty, since no transform runs.
    #[must_use]
    pub fn new(len_a: usize, len_b: usize) -> Option<Self> {
        if len_a == 0 || len_b == 0 {
            return None;
        }
        let total_digits = len_a + len_b;
        let transform_len = total_digits.next_power_of_two();
        Some(Self {
            transform_len,
            stages: transform_len.trailing_zeros(),
            working_bytes: 2 * transform_len * std::mem::size_of::<Complex>(),
            total_digits,
        })
    }

    /// True while the product is inside the exact-rounding range.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.total_digits <= PRECISION_WARN_DIGITS
    }
}

/// Multiply two digit sequences with the default options.
///
/// # Example
/// ```
/// use fftmul_core::{multiply, DigitSequence};
///
/// let a: DigitSequence = "999".parse().unwrap();
/// let b: DigitSequence = "999".parse().unwrap();
/// assert_eq!(multiply(&a, &b).to_string(), "998001");
/// ```
#[must_use]
pub fn multiply(a: &DigitSequence, b: &DigitSequence) -> DigitSequence {
    multiply_with(a, b, &MulOptions::default())
}

/// Multiply two digit sequences.
///
/// An empty operand yields the empty sequence without running any transform.
#[must_use]
pub fn multiply_with(a: &DigitSequence, b: &DigitSequence, opts: &MulOptions) -> DigitSequence {
    let Some(plan) = MulPlan::new(a.len(), b.len()) else {
        return DigitSequence::new();
    };
    check_precision(&plan);

    let mut coeffs_a = encode(a, plan.transform_len);
    let mut coeffs_b = encode(b, plan.transform_len);

    fft_forward(&mut coeffs_a);
    fft_forward(&mut coeffs_b);

    pointwise_multiply(&mut coeffs_a, &coeffs_b);

    fft_inverse(&mut coeffs_a);

    decode(&coeffs_a, opts.tolerance)
}

/// Square a digit sequence, reusing one forward transform for both factors.
#[must_use]
pub fn square_with(a: &DigitSequence, opts: &MulOptions) -> DigitSequence {
    let Some(plan) = MulPlan::new(a.len(), a.len()) else {
        return DigitSequence::new();
    };
    check_precision(&plan);

    let mut coeffs = encode(a, plan.transform_len);
    fft_forward(&mut coeffs);
    for c in &mut coeffs {
        let v = *c;
        *c = v * v;
    }
    fft_inverse(&mut coeffs);

    decode(&coeffs, opts.tolerance)
}

/// Multiply many independent pairs in parallel.
///
/// Results are returned in input order. Each product runs the sequential
/// pipeline; only whole multiplications are distributed across threads.
#[must_use]
pub fn multiply_batch(
    pairs: &[(DigitSequence, DigitSequence)],
    opts: &MulOptions,
) -> Vec<DigitSequence> {
    pairs
        .par_iter()
        .map(|(a, b)| multiply_with(a, b, opts))
        .collect()
}

/// Pointwise product in the frequency domain, stored into `acc`.
pub fn pointwise_multiply(acc: &mut [Complex], other: &[Complex]) {
    assert_eq!(acc.len(), other.len());
    for (x, y) in acc.iter_mut().zip(other) {
        *x *= *y;
    }
}

/// Log the plan, and warn when it leaves the exact-rounding range.
///
/// Returns whether the warning was emitted.
fn check_precision(plan: &MulPlan) -> bool {
    debug!(
        total_digits = plan.total_digits,
        transform_len = plan.transform_len,
        stages = plan.stages,
        "fft multiply"
    );
    if plan.is_exact() {
        return false;
    }
    warn!(
        total_digits = plan.total_digits,
        limit = PRECISION_WARN_DIGITS,
        "operands exceed the exact-rounding range; product digits may be wrong"
    );
    true
}
