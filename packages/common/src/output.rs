//! Turning a terminal execution result into what participants see, and
//! deciding whether a run produced the expected answer.

use serde::Serialize;

use crate::ExecutionResult;

/// Shown when a run printed nothing on any stream.
pub const NO_OUTPUT: &str = "No output";

/// Display form of a finished run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormattedOutput {
    pub output: String,
    pub status: String,
}

/// Pick the text to display and the status description.
///
/// Output priority is stdout, then stderr, then compiler output, then
/// [`NO_OUTPUT`]. Empty strings count as absent.
pub fn format_result(result: &ExecutionResult) -> FormattedOutput {
    let output = [&result.stdout, &result.stderr, &result.compile_output]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .cloned()
        .unwrap_or_else(|| NO_OUTPUT.to_string());

    FormattedOutput {
        output,
        status: result.status.description().to_string(),
    }
}

/// Whether stdout matches `expected` after newline and edge-whitespace
/// normalization.
///
/// Only stdout is consulted. A missing (or empty) stdout or expected value is
/// never a match.
pub fn validate_output(result: &ExecutionResult, expected: Option<&str>) -> bool {
    let (Some(stdout), Some(expected)) = (result.stdout.as_deref(), expected) else {
        return false;
    };
    if stdout.is_empty() || expected.is_empty() {
        return false;
    }
    normalize(stdout) == normalize(expected)
}

fn normalize(s: &str) -> String {
    s.replace("\r\n", "\n").trim().to_string()
}
