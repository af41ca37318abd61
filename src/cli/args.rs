//! CLI argument definitions and parsing structures

use clap::Parser;

/// editgate - allow, warn about, or block file edits by path
#[derive(Parser, Debug)]
#[command(name = "editgate")]
#[command(about = "Path gatekeeper hook that allows, warns about, or blocks file edits")]
#[command(long_about = r#"
editgate is called by a host tool before a file edit. It reads a JSON request
from stdin, checks tool_input.file_path against compiled-in path patterns and
exits with 0 (allow) or 2 (block).

EXAMPLES:
  echo '{"tool_input":{"file_path":".env"}}' | editgate
  echo '{"tool_input":{"file_path":"package.json"}}' | editgate --verbose

EXIT CODES:
  0  allow the edit (also used whenever the request cannot be evaluated)
  2  block the edit

LOGGING:
  Diagnostics are off by default. Set EDITGATE_LOG (e.g. EDITGATE_LOG=debug)
  or pass --verbose to log decisions to stderr.
"#)]
#[command(version)]
pub struct Cli {
    /// Enable verbose diagnostic logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Build the clap command, e.g. for completions or help rendering
pub fn build_cli() -> clap::Command {
    <Cli as clap::CommandFactory>::command()
}
