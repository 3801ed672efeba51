//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fftmul_core::{MulError, MulOptions, DEFAULT_TOLERANCE};

/// Multiply two arbitrarily large decimal integers using an FFT.
///
/// Operands come from the command line, or from the first two lines of the
/// input file (stdin by default).
#[derive(Parser, Debug)]
#[command(name = "fftmul", version, about)]
pub struct AppConfig {
    /// The two numbers to multiply. Read from input when omitted.
    #[arg(num_args = 0..=2, value_name = "OPERAND")]
    pub operands: Vec<String>,

    /// Input file with one operand per line.
    #[arg(short, long, value_name = "FILE", conflicts_with = "operands")]
    pub input: Option<PathBuf>,

    /// Output file (overwritten). The product is then not printed to stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rounding tolerance for decoding transform output, in (0, 1). 0 selects the default.
    #[arg(long, default_value_t = DEFAULT_TOLERANCE, env = "FFTMUL_TOLERANCE")]
    pub tolerance: f64,

    /// Verbose output (never truncate the product).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show transform size, timing, and digit counts.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only output the number).
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Emit a JSON report instead of text.
    #[arg(long)]
    pub json: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Multiplication options derived from the flags.
    pub fn mul_options(&self) -> Result<MulOptions, MulError> {
        MulOptions {
            tolerance: self.tolerance,
        }
        .normalize()
        .validate()
    }
}
