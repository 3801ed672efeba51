//! Application entry point and dispatch.

use std::io;
use std::time::Instant;

use anyhow::{Context, Result};

use fftmul_cli::input::{parse_operands, read_operands, read_operands_from_path};
use fftmul_cli::output::write_to_file;
use fftmul_cli::{CLIResultPresenter, JsonResultPresenter, MulOutcome, ResultPresenter};
use fftmul_core::{multiply_with, DigitSequence, MulError, MulOptions, MulPlan};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
///
/// Errors are reported through the selected presenter before being returned,
/// so the caller only maps them to an exit code.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fftmul_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let presenter = presenter_for(config);
    let result = run_cli(config, presenter.as_ref());
    if let Err(ref err) = result {
        presenter.present_error(&format!("{err:#}"));
    }
    result
}

fn presenter_for(config: &AppConfig) -> Box<dyn ResultPresenter> {
    if config.json {
        Box::new(JsonResultPresenter)
    } else {
        Box::new(CLIResultPresenter::new(config.verbose, config.quiet))
    }
}

fn run_cli(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<()> {
    tracing::debug!(version = %full_version(), "starting");
    let opts = config.mul_options()?;
    let (a, b) = load_operands(config)?;
    let outcome = compute(a, b, &opts);

    // With an output file, stdout only carries an explicitly requested report.
    if let Some(ref path) = config.output {
        write_to_file(path, &outcome.product)
            .with_context(|| format!("writing product to {}", path.display()))?;
        tracing::info!(path = %path.display(), digits = outcome.product.len(), "product written");
        if !(config.json || config.details) {
            return Ok(());
        }
    }

    presenter.present_result(&outcome, config.details);
    Ok(())
}

/// Multiply and collect everything the presenters need.
pub fn compute(a: DigitSequence, b: DigitSequence, opts: &MulOptions) -> MulOutcome {
    let plan = MulPlan::new(a.len(), b.len());
    let start = Instant::now();
    let product = multiply_with(&a, &b, opts);
    let duration = start.elapsed();
    tracing::debug!(?duration, digits = product.len(), "multiplication complete");
    MulOutcome {
        a,
        b,
        product,
        plan,
        tolerance: opts.tolerance,
        duration,
    }
}

fn load_operands(config: &AppConfig) -> Result<(DigitSequence, DigitSequence), MulError> {
    match (config.operands.as_slice(), &config.input) {
        ([a, b], _) => parse_operands(a, b),
        ([_], _) => Err(MulError::MissingOperand(2)),
        (_, Some(path)) => read_operands_from_path(path),
        _ => read_operands(io::stdin().lock()),
    }
}
