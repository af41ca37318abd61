//! CLI entry point
//!
//! This module owns the `run()` function which:
//! - Parses CLI arguments
//! - Initializes logging
//! - Runs the hook command
//! - Handles all output, including errors

use clap::Parser;
use tracing::debug;

use editgate_gate::Gatekeeper;
use editgate_utils::ExitCode;
use editgate_utils::logging::init_tracing;

use super::args::Cli;
use super::commands;

/// Main CLI execution function.
///
/// Returns `Ok(())` when the edit is allowed and `Err(ExitCode::BLOCK)` when
/// it is blocked. No other exit code is produced: argument errors print
/// clap's message and allow, and a panic is reported as a hook error.
///
/// main.rs only calls `std::process::exit(code.as_i32())` on error - it does NOT print.
pub fn run() -> Result<(), ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout, usage errors to stderr
            let _ = err.print();
            return Ok(());
        }
    };

    // A second subscriber (e.g. when embedded) is not an error worth reporting
    let _ = init_tracing(cli.verbose);

    // Panics are reported once, as a hook error
    std::panic::set_hook(Box::new(|_| {}));

    let gate = Gatekeeper::builtin();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    debug!("Running in hook mode");
    let code = commands::fail_open_on_panic(
        || {
            commands::execute_hook_command(
                &gate,
                &mut std::io::stdin().lock(),
                &mut stdout.lock(),
                &mut stderr.lock(),
            )
        },
        &mut stderr.lock(),
    );

    if code.is_block() { Err(code) } else { Ok(()) }
}
