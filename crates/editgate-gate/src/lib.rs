//! Path gatekeeper decisions for file-edit requests

pub mod decision;
pub mod gatekeeper;
pub mod patterns;
pub mod request;

// Re-exports for convenience
pub use decision::Decision;
pub use gatekeeper::Gatekeeper;
pub use patterns::{BLOCKED_PATTERNS, WARN_PATTERNS};
pub use request::EditRequest;
