//! editgate - path gatekeeper for file-edit hooks
//!
//! editgate is invoked by a host tool before it edits a file. It reads one
//! JSON request on stdin, checks `tool_input.file_path` against two
//! compiled-in lists of path fragments, and answers with an exit code:
//!
//! - `0`: allow the edit (optionally after printing a warning on stdout)
//! - `2`: block the edit (reason printed on stderr)
//!
//! Anything the gatekeeper cannot evaluate, such as malformed JSON, a missing
//! path or a request of the wrong shape, is allowed. Errors other than
//! unparseable JSON are reported on stderr as `Hook error: ...`.
//!
//! # Quick Start
//!
//! ```bash
//! echo '{"tool_input":{"file_path":".env"}}' | editgate
//! echo $?   # 2
//!
//! echo '{"tool_input":{"file_path":"package.json"}}' | editgate
//! # ⚠️  Editing config file: package.json
//! ```
//!
//! # Library Use
//!
//! ```rust
//! use editgate::{Decision, Gatekeeper};
//!
//! let gate = Gatekeeper::builtin();
//! assert_eq!(gate.evaluate_path("src/app/page.tsx"), Decision::Allow);
//! assert!(gate.evaluate_path("node_modules/react/index.js").exit_code().is_block());
//! ```

pub use editgate_gate::{BLOCKED_PATTERNS, Decision, EditRequest, Gatekeeper, WARN_PATTERNS};
pub use editgate_utils::{EditGateError, ExitCode};

pub mod cli;
