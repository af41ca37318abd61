//! Foundation utilities shared by the editgate crates
//!
//! Error type, exit codes and logging setup live here so the decision
//! crate and the binary agree on how failures resolve.

pub mod error;
pub mod exit_codes;
pub mod logging;

pub use error::EditGateError;
pub use exit_codes::ExitCode;
