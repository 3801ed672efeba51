//! In-place radix-2 complex FFT.
//!
//! Iterative Cooley-Tukey: bit-reversal permutation followed by `log2(n)`
//! butterfly stages. Roots of unity are produced by a half-angle recurrence,
//! so no trigonometric call is made inside the transform.

use crate::complex::Complex;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Coefficients to values. No scaling.
    Forward,
    /// Values to coefficients. Output is divided by `n`.
    Inverse,
}

impl Direction {
    #[must_use]
    pub fn is_forward(self) -> bool {
        matches!(self, Self::Forward)
    }
}

/// Transform `data` in place.
///
/// # Panics
///
/// Panics if `data.len()` is not a power of two. Callers size their vectors
/// with [`usize::next_power_of_two`]; any other length is a bug upstream.
pub fn transform(direction: Direction, data: &mut [Complex]) {
    let n = data.len();
    assert!(
        n.is_power_of_two(),
        "invalid transform length {n}: must be a power of two"
    );
    let log_n = n.trailing_zeros();

    bit_reverse_permutation(data);

    let mut c = Complex::new(-1.0, 0.0);
    let mut half = 1;
    for _ in 0..log_n {
        let span = half << 1;
        let mut u = Complex::ONE;

        for j in 0..half {
            for i in (j..n).step_by(span) {
                let i1 = i + half;
                let t = u * data[i1];
                data[i1] = data[i] - t;
                data[i] += t;
            }
            u *= c;
        }

        // Half-angle step: c becomes the principal root of the next stage.
        c = Complex::new(((1.0 + c.re) / 2.0).sqrt(), ((1.0 - c.re) / 2.0).sqrt());
        if !direction.is_forward() {
            c.im = -c.im;
        }
        half = span;
    }

    if !direction.is_forward() {
        #[allow(clippy::cast_precision_loss)]
        let scale = n as f64;
        for elem in data.iter_mut() {
            *elem /= scale;
        }
    }
}

/// Forward transform.
pub fn fft_forward(data: &mut [Complex]) {
    transform(Direction::Forward, data);
}

/// Inverse transform, including the `1/n` normalization.
pub fn fft_inverse(data: &mut [Complex]) {
    transform(Direction::Inverse, data);
}

/// Reorder so that index `i` holds the element previously at `rev(i)`.
///
/// Linear index walk: `j` tracks the bit-reversal of `i` by carrying from the
/// most significant bit downward.
fn bit_reverse_permutation(data: &mut [Complex]) {
    let n = data.len();
    let top = n >> 1;
    let mut j = 0;
    for i in 0..n.saturating_sub(1) {
        if i < j {
            data.swap(i, j);
        }
        let mut k = top;
        while k <= j {
            j -= k;
            k >>= 1;
        }
        j += k;
    }
}
