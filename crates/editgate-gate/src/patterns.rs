//! Compiled-in path patterns
//!
//! Both lists are matched as plain substrings of the requested path, in the
//! order given here. They are not configurable.

/// Path fragments that may never appear in an edited file's path.
pub const BLOCKED_PATTERNS: &[&str] = &[
    ".env",
    ".git/",
    "node_modules/",
    "src/generated/",
    "pnpm-lock.yaml",
    "package-lock.json",
    "yarn.lock",
    // Hook settings of the host tool itself
    ".claude/settings.json",
];

/// Config files that are allowed but announced with a warning.
pub const WARN_PATTERNS: &[&str] = &["package.json", "tsconfig.json", "prisma/schema.prisma"];
