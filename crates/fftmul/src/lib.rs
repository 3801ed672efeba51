//! Application logic for the fftmul binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
