//! Exit codes understood by the host tool.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `ALLOW` | Edit may proceed (including fail-open outcomes) |
//! | 2 | `BLOCK` | Edit is rejected by the host |
//!
//! No other codes are ever produced.

/// Process exit code returned to the host tool.
///
/// `ExitCode` provides type-safe exit code handling. Use the named constants,
/// then [`as_i32()`](Self::as_i32) to get the numeric value for
/// `std::process::exit()`.
///
/// # Example
///
/// ```rust
/// use editgate_utils::ExitCode;
///
/// assert_eq!(ExitCode::ALLOW.as_i32(), 0);
/// assert_eq!(ExitCode::BLOCK.as_i32(), 2);
/// assert!(ExitCode::BLOCK.is_block());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Allow - the edit may proceed
    pub const ALLOW: ExitCode = ExitCode(0);

    /// Block - the host must not perform the edit
    pub const BLOCK: ExitCode = ExitCode(2);

    /// Get the numeric exit code value.
    ///
    /// Use this with `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }

    /// Whether this code tells the host to reject the edit.
    #[must_use]
    pub const fn is_block(self) -> bool {
        self.0 == Self::BLOCK.0
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}
