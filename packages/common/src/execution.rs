use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{JudgeStatus, Language};

/// A single code run to be sent to the judge.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRequest {
    /// Program source, sent verbatim.
    pub source_code: String,
    pub language: Language,
    /// Data fed to the program's standard input.
    pub stdin: Option<String>,
    /// Expected output, forwarded so the judge can report Wrong Answer.
    pub expected_output: Option<String>,
    /// CPU time limit in seconds.
    pub cpu_time_limit: Option<f64>,
    /// Memory limit in kilobytes.
    pub memory_limit: Option<u64>,
}

impl SubmissionRequest {
    pub fn new(source_code: impl Into<String>, language: Language) -> Self {
        Self {
            source_code: source_code.into(),
            language,
            stdin: None,
            expected_output: None,
            cpu_time_limit: None,
            memory_limit: None,
        }
    }

    pub fn with_stdin(mut self, stdin: Option<String>) -> Self {
        self.stdin = stdin;
        self
    }

    pub fn with_expected_output(mut self, expected_output: Option<String>) -> Self {
        self.expected_output = expected_output;
        self
    }

    pub fn with_limits(mut self, cpu_time_limit: Option<f64>, memory_limit: Option<u64>) -> Self {
        self.cpu_time_limit = cpu_time_limit;
        self.memory_limit = memory_limit;
        self
    }
}

/// Opaque handle for a job accepted by the judge. Only used to poll.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExecutionToken(String);

impl ExecutionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExecutionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decoded result of one status check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub status: JudgeStatus,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    /// Wall time reported by the judge, in seconds.
    pub time_seconds: Option<f64>,
    /// Peak memory reported by the judge, in kilobytes.
    pub memory_kb: Option<i64>,
}

impl ExecutionResult {
    /// A result with only a status and no output. Mostly useful for tests.
    pub fn with_status(status: JudgeStatus) -> Self {
        Self {
            status,
            stdout: None,
            stderr: None,
            compile_output: None,
            time_seconds: None,
            memory_kb: None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
