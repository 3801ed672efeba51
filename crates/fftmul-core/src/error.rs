//! Error type for multiplication input and configuration.

/// Errors surfaced by `fftmul-core`.
///
/// Numeric conditions never appear here: an invalid transform length is a
/// panic, and rounding noise beyond the tolerance is undetectable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MulError {
    /// A character outside `0-9` appeared in decimal text.
    #[error("invalid digit {ch:?} at position {position}")]
    InvalidDigit {
        /// Offending character.
        ch: char,
        /// Zero-based character offset in the trimmed text.
        position: usize,
    },

    /// Invalid option value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Fewer than two operands were supplied.
    #[error("missing operand #{0}")]
    MissingOperand(usize),

    /// Reading operands failed.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for MulError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
