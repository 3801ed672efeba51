//! Decimal digit sequences.
//!
//! Digits are stored least-significant first, the same order as polynomial
//! coefficients, so index `i` is the coefficient of `10^i`.

use std::fmt;
use std::str::FromStr;

use crate::error::MulError;

/// An unsigned decimal integer as a sequence of digits in `0..=9`.
///
/// The empty sequence is the "no digits" operand and renders as `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DigitSequence {
    digits: Vec<u8>,
}

impl DigitSequence {
    /// The empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The single digit zero.
    #[must_use]
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    /// Build from digits ordered least-significant first.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    #[must_use]
    pub fn from_lsd_first(digits: Vec<u8>) -> Self {
        assert!(
            digits.iter().all(|&d| d < 10),
            "digit out of range in {digits:?}"
        );
        Self { digits }
    }

    /// Build from digits ordered most-significant first.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    #[must_use]
    pub fn from_msd_first(digits: &[u8]) -> Self {
        Self::from_lsd_first(digits.iter().rev().copied().collect())
    }

    /// Build from a machine integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_u64(mut value: u64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let mut digits = Vec::with_capacity(20);
        while value > 0 {
            digits.push((value % 10) as u8);
            value /= 10;
        }
        Self { digits }
    }

    /// Digits, least-significant first.
    #[must_use]
    pub fn as_lsd_slice(&self) -> &[u8] {
        &self.digits
    }

    /// Digits, most-significant first.
    pub fn iter_msd(&self) -> impl Iterator<Item = u8> + '_ {
        self.digits.iter().rev().copied()
    }

    /// Number of stored digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True for the "no digits" sequence.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// True if the value is zero (empty or all-zero).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Drop leading (most-significant) zeros, keeping a lone `0`.
    #[must_use]
    pub fn trimmed(mut self) -> Self {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        self
    }
}

impl FromStr for DigitSequence {
    type Err = MulError;

    /// Parse decimal text.
    ///
    /// Surrounding whitespace is ignored. A leading run of zeros is skipped
    /// unless the whole number is zero, which parses to the single digit `0`.
    /// Empty text parses to the empty sequence.
    #[allow(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let mut msd_first = Vec::with_capacity(text.len());
        for (position, ch) in text.chars().enumerate() {
            let digit = ch
                .to_digit(10)
                .ok_or(MulError::InvalidDigit { ch, position })?;
            msd_first.push(digit as u8);
        }
        if msd_first.is_empty() {
            return Ok(Self::new());
        }
        let first_nonzero = msd_first.iter().position(|&d| d != 0);
        Ok(match first_nonzero {
            Some(start) => Self::from_msd_first(&msd_first[start..]),
            None => Self::zero(),
        })
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return f.pad("0");
        }
        let text: String = self.iter_msd().map(|d| char::from(b'0' + d)).collect();
        f.pad(&text)
    }
}

impl From<u64> for DigitSequence {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}
