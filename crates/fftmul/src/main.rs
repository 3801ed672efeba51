//! fftmul: FFT multiplication of large decimal integers.

use std::process::ExitCode;

use fftmul_core::exit_codes;
use fftmul_lib::{app, config, errors};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS),
        Err(err) => ExitCode::from(errors::exit_code(&err)),
    }
}
