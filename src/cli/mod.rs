//! Command-line interface for editgate
//!
//! ## Module Structure
//!
//! - `args`: CLI argument definitions (clap)
//! - `run`: Main entry point
//! - `commands`: Hook command over injected readers and writers

pub mod args;
pub mod commands;
mod run;

// Re-export argument types
pub use args::{Cli, build_cli};

// Re-export run function
pub use run::run;
