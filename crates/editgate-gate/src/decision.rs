//! Gatekeeper outcomes and their messages

use editgate_utils::ExitCode;

/// Outcome of evaluating one file path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// No pattern matched
    Allow,
    /// A warn pattern matched; the edit proceeds with a notice
    Warn { pattern: &'static str },
    /// A blocked pattern matched; the edit is rejected
    Block { pattern: &'static str },
}

impl Decision {
    /// Exit code the host expects for this outcome.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Decision::Allow | Decision::Warn { .. } => ExitCode::ALLOW,
            Decision::Block { .. } => ExitCode::BLOCK,
        }
    }

    /// The matched pattern, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&'static str> {
        match self {
            Decision::Allow => None,
            Decision::Warn { pattern } | Decision::Block { pattern } => Some(*pattern),
        }
    }

    /// Text written to stderr when the edit is blocked: the path, then the
    /// matched pattern on an indented second line.
    #[must_use]
    pub fn block_message(&self, file_path: &str) -> Option<String> {
        match self {
            Decision::Block { pattern } => Some(format!(
                "🚫 Blocked: Cannot edit '{file_path}'\n   Reason: '{pattern}' is a protected path"
            )),
            _ => None,
        }
    }

    /// Line written to stdout when the edit triggers a warning.
    #[must_use]
    pub fn warn_message(&self, file_path: &str) -> Option<String> {
        match self {
            Decision::Warn { .. } => Some(format!("⚠️  Editing config file: {file_path}")),
            _ => None,
        }
    }
}
