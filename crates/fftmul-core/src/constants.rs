//! Constants for the multiplication pipeline and the CLI.

/// Default rounding tolerance used when decoding transform output.
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Largest combined operand length (in digits) known to multiply exactly.
///
/// Past this size the transform needs 2^19 points or more, and the error
/// accumulated by the twiddle recurrence can exceed the default tolerance.
/// All-nines squares are exact at 2^17 digits per operand and wrong one digit
/// later. Larger products are still computed but a warning is logged.
pub const PRECISION_WARN_DIGITS: usize = 1 << 18;

/// Numeric base of the digit sequences.
pub const RADIX: u64 = 10;

/// Exit codes for the `fftmul` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: u8 = 1;
    /// Invalid configuration.
    pub const ERROR_CONFIG: u8 = 4;
    /// Malformed input data (sysexits `EX_DATAERR`).
    pub const ERROR_INPUT: u8 = 65;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_is_inside_unit_interval() {
        assert!(DEFAULT_TOLERANCE > 0.0 && DEFAULT_TOLERANCE < 1.0);
    }

    #[test]
    fn warn_threshold_is_power_of_two() {
        assert!(PRECISION_WARN_DIGITS.is_power_of_two());
    }
}
