//! Multiplication options.

use crate::constants::DEFAULT_TOLERANCE;
use crate::error::MulError;

/// Options for FFT multiplication.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MulOptions {
    /// Rounding tolerance for decoding transform output.
    ///
    /// A coefficient whose real part is below this value is treated as zero.
    /// Lowering it makes true near-zero values more likely to be read as a
    /// digit when noise is present; raising it tolerates more noise but can
    /// swallow a genuine small remainder. Must lie in `(0, 1)`.
    pub tolerance: f64,
}

impl Default for MulOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl MulOptions {
    /// Options with the given tolerance, validated.
    pub fn with_tolerance(tolerance: f64) -> Result<Self, MulError> {
        Self { tolerance }.validate()
    }

    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn normalize(mut self) -> Self {
        if self.tolerance == 0.0 {
            self.tolerance = DEFAULT_TOLERANCE;
        }
        self
    }

    /// Check that every option is in range.
    pub fn validate(self) -> Result<Self, MulError> {
        if !(self.tolerance > 0.0 && self.tolerance < 1.0) {
            return Err(MulError::Config(format!(
                "tolerance must be in (0, 1), got {}",
                self.tolerance
            )));
        }
        Ok(self)
    }
}
