//! Logging infrastructure for editgate
//!
//! Logging is off unless asked for. The hook's stdout/stderr are part of its
//! contract with the host, so tracing output only appears when
//! `EDITGATE_LOG` is set or `--verbose` is passed. Events always go to stderr.

use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive for diagnostics.
pub const LOG_ENV_VAR: &str = "EDITGATE_LOG";

/// Check if colored output should be used.
///
/// Returns true only if stderr is a terminal and `NO_COLOR` is not set.
fn use_color() -> bool {
    std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Build the filter used by [`init_tracing`].
///
/// `EDITGATE_LOG` wins when present and valid; otherwise `verbose` selects
/// `editgate=debug` and the default is `off`.
fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| {
            if verbose {
                EnvFilter::try_new("editgate=debug,editgate_gate=debug,warn")
            } else {
                EnvFilter::try_new("off")
            }
        })
        .unwrap_or_else(|_| EnvFilter::new("off"))
}

/// Initialize the tracing subscriber.
///
/// Uses the compact formatter without targets, thread info or file locations.
/// Returns an error if a global subscriber is already installed; callers in
/// the hook path ignore it.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_color())
                .with_target(verbose)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_line_number(false)
                .with_file(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_is_off() {
        if std::env::var_os(LOG_ENV_VAR).is_some() {
            return;
        }
        assert_eq!(build_filter(false).to_string(), "off");
    }

    #[test]
    fn test_verbose_filter_enables_debug() {
        if std::env::var_os(LOG_ENV_VAR).is_some() {
            return;
        }
        let filter = build_filter(true).to_string();
        assert!(filter.contains("editgate=debug"));
        assert!(filter.contains("editgate_gate=debug"));
    }

    #[test]
    fn test_second_init_fails_without_panicking() {
        let _ = init_tracing(false);
        assert!(init_tracing(false).is_err());
    }
}
