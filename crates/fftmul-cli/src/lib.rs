//! # fftmul-cli
//!
//! Operand input, result presentation, JSON reports, and shell completion.

pub mod completion;
pub mod input;
pub mod interfaces;
pub mod output;
pub mod presenter;
pub mod report;

pub use interfaces::{MulOutcome, ResultPresenter};
pub use presenter::{CLIResultPresenter, JsonResultPresenter};
pub use report::MulReport;
