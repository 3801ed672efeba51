//! Presentation interfaces.

use std::io;
use std::time::Duration;

use fftmul_core::{DigitSequence, MulPlan};

/// Trait for presenting results to the user.
///
/// Implementations format into any writer; the `present_*` methods target
/// stdout and stderr.
pub trait ResultPresenter {
    /// Write a product.
    fn write_result(
        &self,
        out: &mut dyn io::Write,
        outcome: &MulOutcome,
        details: bool,
    ) -> io::Result<()>;

    /// Write an error message.
    fn write_error(&self, out: &mut dyn io::Write, error: &str) -> io::Result<()>;

    /// Present a product on stdout.
    fn present_result(&self, outcome: &MulOutcome, details: bool) {
        if let Err(e) = self.write_result(&mut io::stdout().lock(), outcome, details) {
            tracing::debug!(error = %e, "stdout closed");
        }
    }

    /// Present an error on stderr.
    fn present_error(&self, error: &str) {
        if let Err(e) = self.write_error(&mut io::stderr().lock(), error) {
            tracing::debug!(error = %e, "stderr closed");
        }
    }
}

/// Result of one multiplication, with the data the presenters need.
#[derive(Debug, Clone)]
pub struct MulOutcome {
    /// First operand.
    pub a: DigitSequence,
    /// Second operand.
    pub b: DigitSequence,
    /// The product.
    pub product: DigitSequence,
    /// Transform sizing, `None` when an operand was empty.
    pub plan: Option<MulPlan>,
    /// Tolerance used when decoding.
    pub tolerance: f64,
    /// Wall time of the multiplication.
    pub duration: Duration,
}
