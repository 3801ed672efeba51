//! Operand input: one decimal number per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use fftmul_core::{DigitSequence, MulError};

/// Read two operands from the first two lines of `reader`.
///
/// Lines after the second are ignored. A blank line is an empty operand.
pub fn read_operands<R: BufRead>(reader: R) -> Result<(DigitSequence, DigitSequence), MulError> {
    let mut lines = reader.lines();
    let mut next_operand = |index: usize| -> Result<DigitSequence, MulError> {
        let line = lines.next().ok_or(MulError::MissingOperand(index))??;
        line.parse()
    };
    let a = next_operand(1)?;
    let b = next_operand(2)?;
    tracing::debug!(a_digits = a.len(), b_digits = b.len(), "operands read");
    Ok((a, b))
}

/// Read two operands from a file.
pub fn read_operands_from_path(path: &Path) -> Result<(DigitSequence, DigitSequence), MulError> {
    let file = File::open(path)
        .map_err(|e| MulError::Io(format!("cannot open {}: {e}", path.display())))?;
    read_operands(BufReader::new(file))
}

/// Parse two operands given as strings (e.g. positional arguments).
pub fn parse_operands(a: &str, b: &str) -> Result<(DigitSequence, DigitSequence), MulError> {
    Ok((a.parse()?, b.parse()?))
}
