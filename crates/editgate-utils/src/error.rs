use std::io;
use thiserror::Error;

use crate::exit_codes::ExitCode;

/// Failures that can occur while handling one hook invocation.
///
/// None of these ever blocks an edit: the gatekeeper fails open, so every
/// variant maps to [`ExitCode::ALLOW`] via [`to_exit_code()`](Self::to_exit_code).
///
/// | Variant | Reported on stderr |
/// |---------|--------------------|
/// | `Input` | yes |
/// | `MalformedRequest` | no |
/// | `InvalidRequest` | yes |
/// | `Output` | yes |
/// | `Internal` | yes |
#[derive(Error, Debug)]
pub enum EditGateError {
    #[error("failed to read request from stdin: {0}")]
    Input(#[source] io::Error),

    #[error("malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("failed to write diagnostic: {0}")]
    Output(#[source] io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl EditGateError {
    /// Build an `Internal` error from a caught panic payload.
    #[must_use]
    pub fn from_panic(payload: &(dyn std::any::Any + Send)) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic with non-string payload".to_string()
        };
        EditGateError::Internal(message)
    }

    /// Whether this error should be reported to the user.
    ///
    /// Input that is not JSON at all is silently allowed. JSON of the wrong
    /// shape and every other failure is an unexpected runtime error and gets
    /// one line on stderr.
    #[must_use]
    pub fn is_reported(&self) -> bool {
        !matches!(self, EditGateError::MalformedRequest(_))
    }

    /// Map this error to the exit code returned to the host.
    #[must_use]
    pub fn to_exit_code(&self) -> ExitCode {
        ExitCode::ALLOW
    }
}
