//! CLI result presenters.

use std::io::{self, Write};

use crate::interfaces::{MulOutcome, ResultPresenter};
use crate::output::{format_bytes, format_duration, format_result};
use crate::report::MulReport;

/// Human-readable presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn write_result(
        &self,
        out: &mut dyn Write,
        outcome: &MulOutcome,
        details: bool,
    ) -> io::Result<()> {
        if self.quiet {
            return writeln!(out, "{}", outcome.product);
        }

        if details {
            writeln!(out, "Operand digits: {} x {}", outcome.a.len(), outcome.b.len())?;
            match outcome.plan {
                Some(plan) => {
                    writeln!(
                        out,
                        "Transform: {} points, {} stages, {} working memory",
                        plan.transform_len,
                        plan.stages,
                        format_bytes(plan.working_bytes)
                    )?;
                    if !plan.is_exact() {
                        writeln!(out, "Precision: beyond the exact-rounding range")?;
                    }
                }
                None => writeln!(out, "Transform: skipped (empty operand)")?,
            }
            writeln!(out, "Tolerance: {}", outcome.tolerance)?;
            writeln!(out, "Duration: {}", format_duration(outcome.duration))?;
            writeln!(out, "Product digits: {}", outcome.product.len().max(1))?;
        }

        writeln!(out, "{}", format_result(&outcome.product, self.verbose))
    }

    fn write_error(&self, out: &mut dyn Write, error: &str) -> io::Result<()> {
        writeln!(out, "Error: {error}")
    }
}

/// JSON presenter, one report object per product.
pub struct JsonResultPresenter;

impl ResultPresenter for JsonResultPresenter {
    fn write_result(
        &self,
        out: &mut dyn Write,
        outcome: &MulOutcome,
        _details: bool,
    ) -> io::Result<()> {
        let json = MulReport::from_outcome(outcome).to_json()?;
        writeln!(out, "{json}")
    }

    fn write_error(&self, out: &mut dyn Write, error: &str) -> io::Result<()> {
        writeln!(out, "{}", serde_json::json!({ "error": error }))
    }
}
