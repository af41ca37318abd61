//! Hook command implementation
//!
//! The command takes its streams as parameters so the hook contract can be
//! exercised in-process. Every path through [`execute_hook_command`] and
//! [`fail_open_on_panic`] returns either `ALLOW` or `BLOCK`.

use std::io::{Read, Write};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

use editgate_gate::{Decision, EditRequest, Gatekeeper};
use editgate_utils::{EditGateError, ExitCode};

/// Read one request from `input`, decide, and write diagnostics.
///
/// Input that is not JSON allows silently, as does a missing or empty path.
/// Any other failure is reported on `stderr` and also allows.
pub fn execute_hook_command<R, O, E>(
    gate: &Gatekeeper,
    input: &mut R,
    stdout: &mut O,
    stderr: &mut E,
) -> ExitCode
where
    R: Read,
    O: Write,
    E: Write,
{
    let result = read_request(input).and_then(|request| match request.file_path() {
        Some(path) => report_decision(gate, path, stdout, stderr),
        None => {
            debug!("Request has no file path, allowing");
            Ok(ExitCode::ALLOW)
        }
    });

    result.unwrap_or_else(|err| fail_open(&err, stderr))
}

/// Run `command`, turning a panic into a reported, fail-open `ALLOW`.
pub fn fail_open_on_panic<F, E>(command: F, stderr: &mut E) -> ExitCode
where
    F: FnOnce() -> ExitCode,
    E: Write,
{
    match panic::catch_unwind(AssertUnwindSafe(command)) {
        Ok(code) => code,
        Err(payload) => fail_open(&EditGateError::from_panic(payload.as_ref()), stderr),
    }
}

fn read_request<R: Read>(input: &mut R) -> Result<EditRequest, EditGateError> {
    let mut raw = String::new();
    input
        .read_to_string(&mut raw)
        .map_err(EditGateError::Input)?;

    EditRequest::from_json(&raw)
}

fn report_decision<O, E>(
    gate: &Gatekeeper,
    file_path: &str,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<ExitCode, EditGateError>
where
    O: Write,
    E: Write,
{
    let decision = gate.evaluate_path(file_path);

    match decision {
        Decision::Block { .. } => {
            if let Some(message) = decision.block_message(file_path) {
                writeln!(stderr, "{message}").map_err(EditGateError::Output)?;
            }
        }
        Decision::Warn { .. } => {
            if let Some(message) = decision.warn_message(file_path) {
                writeln!(stdout, "{message}").map_err(EditGateError::Output)?;
            }
        }
        Decision::Allow => {}
    }

    Ok(decision.exit_code())
}

fn fail_open<E: Write>(err: &EditGateError, stderr: &mut E) -> ExitCode {
    if err.is_reported() {
        warn!(error = %err, "Hook error, allowing edit");
        let _ = writeln!(stderr, "Hook error: {err}");
    } else {
        debug!(error = %err, "Unparseable request, allowing edit");
    }
    err.to_exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct Outcome {
        code: ExitCode,
        stdout: String,
        stderr: String,
    }

    fn run_hook_bytes(input: &[u8]) -> Outcome {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = execute_hook_command(
            &Gatekeeper::builtin(),
            &mut &input[..],
            &mut stdout,
            &mut stderr,
        );
        Outcome {
            code,
            stdout: String::from_utf8(stdout).unwrap(),
            stderr: String::from_utf8(stderr).unwrap(),
        }
    }

    fn run_hook(input: &str) -> Outcome {
        run_hook_bytes(input.as_bytes())
    }

    fn request(path: &str) -> String {
        serde_json::json!({ "tool_name": "Edit", "tool_input": { "file_path": path } }).to_string()
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("stdin closed"))
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_blocked_path() {
        let out = run_hook(&request(".env"));
        assert_eq!(out.code, ExitCode::BLOCK);
        assert_eq!(
            out.stderr,
            "🚫 Blocked: Cannot edit '.env'\n   Reason: '.env' is a protected path\n"
        );
        assert!(out.stdout.is_empty());
    }

    #[test]
    fn test_node_modules_is_blocked() {
        let out = run_hook(&request("node_modules/react/index.js"));
        assert_eq!(out.code, ExitCode::BLOCK);
        assert!(out.stderr.contains("'node_modules/' is a protected path"));
    }

    #[test]
    fn test_generated_code_and_hook_settings_are_blocked() {
        for path in ["src/generated/client.ts", ".claude/settings.json"] {
            let out = run_hook(&request(path));
            assert_eq!(out.code, ExitCode::BLOCK, "path: {path}");
            assert!(out.stderr.contains(path));
        }
    }

    #[test]
    fn test_warned_path_writes_one_line() {
        let out = run_hook(&request("package.json"));
        assert_eq!(out.code, ExitCode::ALLOW);
        assert_eq!(out.stdout, "⚠️  Editing config file: package.json\n");
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_prisma_schema_warns() {
        let out = run_hook(&request("prisma/schema.prisma"));
        assert_eq!(out.code, ExitCode::ALLOW);
        assert_eq!(out.stdout.lines().count(), 1);
        assert!(out.stdout.contains("prisma/schema.prisma"));
    }

    #[test]
    fn test_path_matching_several_warn_patterns_warns_once() {
        let out = run_hook(&request("tsconfig.json.package.json"));
        assert_eq!(out.code, ExitCode::ALLOW);
        assert_eq!(out.stdout.lines().count(), 1);
    }

    #[test]
    fn test_unmatched_path_is_silent() {
        for path in ["src/app/page.tsx", ".next/cache/x", "middleware.ts"] {
            let out = run_hook(&request(path));
            assert_eq!(out.code, ExitCode::ALLOW, "path: {path}");
            assert!(out.stdout.is_empty());
            assert!(out.stderr.is_empty());
        }
    }

    #[test]
    fn test_malformed_json_fails_open_silently() {
        for input in ["", "not json", "{\"tool_input\":"] {
            let out = run_hook(input);
            assert_eq!(out.code, ExitCode::ALLOW, "input: {input:?}");
            assert!(out.stdout.is_empty());
            assert!(out.stderr.is_empty());
        }
    }

    #[test]
    fn test_missing_or_empty_path_allows() {
        for input in [
            "{}",
            r#"{"tool_input":{}}"#,
            r#"{"tool_input":{"file_path":""}}"#,
            r#"{"tool_input":{"file_path":null}}"#,
        ] {
            let out = run_hook(input);
            assert_eq!(out.code, ExitCode::ALLOW, "input: {input}");
            assert!(out.stdout.is_empty());
            assert!(out.stderr.is_empty());
        }
    }

    #[test]
    fn test_wrong_shaped_requests_are_reported_and_allowed() {
        for input in [
            "null",
            "[]",
            "42",
            r#"{"tool_input":null}"#,
            r#"{"tool_input":"x"}"#,
            r#"{"tool_input":{"file_path":42}}"#,
            r#"{"tool_input":{"file_path":[".env"]}}"#,
        ] {
            let out = run_hook(input);
            assert_eq!(out.code, ExitCode::ALLOW, "input: {input}");
            assert!(out.stdout.is_empty());
            assert!(
                out.stderr.starts_with("Hook error: invalid request"),
                "input: {input}, stderr: {}",
                out.stderr
            );
            assert_eq!(out.stderr.lines().count(), 1);
        }
    }

    #[test]
    fn test_non_utf8_input_is_reported_and_allowed() {
        let out = run_hook_bytes(b"{\"tool_input\":{\"file_path\":\"\xff\xfe\"}}");
        assert_eq!(out.code, ExitCode::ALLOW);
        assert!(out.stderr.starts_with("Hook error: failed to read request"));
    }

    #[test]
    fn test_read_failure_is_reported_and_allowed() {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let code = execute_hook_command(
            &Gatekeeper::builtin(),
            &mut FailingReader,
            &mut stdout,
            &mut stderr,
        );
        assert_eq!(code, ExitCode::ALLOW);
        let stderr = String::from_utf8(stderr).unwrap();
        assert!(stderr.starts_with("Hook error:"));
        assert!(stderr.contains("stdin closed"));
    }

    #[test]
    fn test_write_failure_fails_open() {
        let mut stdout = Vec::new();
        let code = execute_hook_command(
            &Gatekeeper::builtin(),
            &mut request(".env").as_bytes(),
            &mut stdout,
            &mut FailingWriter,
        );
        assert_eq!(code, ExitCode::ALLOW);
    }

    #[test]
    fn test_panic_is_reported_and_allowed() {
        let mut stderr = Vec::new();
        let code = fail_open_on_panic(|| panic!("pattern table corrupted"), &mut stderr);
        assert_eq!(code, ExitCode::ALLOW);
        assert_eq!(
            String::from_utf8(stderr).unwrap(),
            "Hook error: internal error: pattern table corrupted\n"
        );
    }

    #[test]
    fn test_panic_guard_passes_block_through() {
        let mut stderr = Vec::new();
        let code = fail_open_on_panic(|| ExitCode::BLOCK, &mut stderr);
        assert_eq!(code, ExitCode::BLOCK);
        assert!(stderr.is_empty());
    }
}
