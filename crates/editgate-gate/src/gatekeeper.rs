//! Path evaluation against the blocked and warn lists
//!
//! Blocked patterns are checked first, in order, and the first hit wins.
//! Warn patterns are only consulted when nothing is blocked, and likewise
//! stop at the first hit. Matching is plain substring containment.

use tracing::{debug, info};

use crate::decision::Decision;
use crate::patterns::{BLOCKED_PATTERNS, WARN_PATTERNS};

/// Evaluates file paths against two ordered pattern lists.
#[derive(Debug, Clone, Copy)]
pub struct Gatekeeper {
    blocked: &'static [&'static str],
    warn: &'static [&'static str],
}

impl Default for Gatekeeper {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Gatekeeper {
    /// Gatekeeper using the compiled-in lists.
    #[must_use]
    pub const fn builtin() -> Self {
        Self::new(BLOCKED_PATTERNS, WARN_PATTERNS)
    }

    /// Gatekeeper with caller-provided lists.
    #[must_use]
    pub const fn new(blocked: &'static [&'static str], warn: &'static [&'static str]) -> Self {
        Self { blocked, warn }
    }

    /// Decide what to do with an edit of `file_path`.
    ///
    /// An empty path is allowed without consulting either list.
    #[must_use]
    pub fn evaluate_path(&self, file_path: &str) -> Decision {
        if file_path.is_empty() {
            debug!("Empty file path, allowing");
            return Decision::Allow;
        }

        if let Some(pattern) = first_match(self.blocked, file_path) {
            info!(file_path = %file_path, pattern = %pattern, "Edit blocked");
            return Decision::Block { pattern };
        }

        if let Some(pattern) = first_match(self.warn, file_path) {
            info!(file_path = %file_path, pattern = %pattern, "Edit allowed with warning");
            return Decision::Warn { pattern };
        }

        debug!(file_path = %file_path, "No pattern matched, allowing");
        Decision::Allow
    }
}

fn first_match(patterns: &'static [&'static str], file_path: &str) -> Option<&'static str> {
    patterns
        .iter()
        .copied()
        .find(|pattern| file_path.contains(pattern))
}
