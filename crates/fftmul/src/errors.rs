//! Error handling and exit codes.

use fftmul_core::constants::exit_codes;
use fftmul_core::MulError;

/// Map a multiplication error to its exit code.
pub fn handle_error(err: &MulError) -> u8 {
    match err {
        MulError::InvalidDigit { .. } | MulError::MissingOperand(_) => exit_codes::ERROR_INPUT,
        MulError::Config(_) => exit_codes::ERROR_CONFIG,
        MulError::Io(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an application error, looking through `anyhow` context.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<MulError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&MulError::MissingOperand(2)), 65);
        assert_eq!(
            handle_error(&MulError::InvalidDigit {
                ch: '?',
                position: 0
            }),
            65
        );
        assert_eq!(handle_error(&MulError::Config("bad".into())), 4);
        assert_eq!(handle_error(&MulError::Io("gone".into())), 1);
    }

    #[test]
    fn exit_code_through_context() {
        let err: anyhow::Result<()> = Err(MulError::Config("tolerance".into())).context("options");
        assert_eq!(exit_code(&err.unwrap_err()), 4);

        let plain = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&plain), exit_codes::ERROR_GENERIC);
    }
}
