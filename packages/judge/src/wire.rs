//! JSON shapes exchanged with the judge service.
//!
//! All text fields travel base64-encoded (`base64_encoded=true`) so that
//! arbitrary bytes survive the JSON transport.

use base64::{Engine as _, engine::general_purpose};
use common::{ExecutionResult, JudgeStatus, SubmissionRequest};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{JudgeError, Result};

/// Body of `POST /submissions`.
#[derive(Debug, Serialize)]
pub struct CreateSubmissionBody {
    pub source_code: String,
    pub language_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_time_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_limit: Option<u64>,
}

impl CreateSubmissionBody {
    pub fn encode(request: &SubmissionRequest) -> Self {
        Self {
            source_code: encode_text(&request.source_code),
            language_id: request.language.judge_id(),
            stdin: request.stdin.as_deref().map(encode_text),
            expected_output: request.expected_output.as_deref().map(encode_text),
            cpu_time_limit: request.cpu_time_limit,
            memory_limit: request.memory_limit,
        }
    }
}

/// Response of `POST /submissions` without `wait`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub id: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Response of `GET /submissions/{token}`, and of `POST /submissions` with
/// `wait=true`.
#[derive(Debug, Deserialize)]
pub struct SubmissionBody {
    #[serde(default)]
    pub token: Option<String>,
    pub status: StatusBody,
    #[serde(default)]
    pub stdout: Option<String>,
    #[serde(default)]
    pub stderr: Option<String>,
    #[serde(default)]
    pub compile_output: Option<String>,
    #[serde(default, deserialize_with = "seconds")]
    pub time: Option<f64>,
    #[serde(default)]
    pub memory: Option<i64>,
}

impl SubmissionBody {
    pub fn decode(self) -> Result<ExecutionResult> {
        Ok(ExecutionResult {
            status: JudgeStatus::from_id(self.status.id),
            stdout: decode_field("stdout", self.stdout)?,
            stderr: decode_field("stderr", self.stderr)?,
            compile_output: decode_field("compile_output", self.compile_output)?,
            time_seconds: self.time,
            memory_kb: self.memory,
        })
    }
}

pub fn encode_text(text: &str) -> String {
    general_purpose::STANDARD.encode(text.as_bytes())
}

/// Decode a base64 field. The judge wraps long values with newlines, so all
/// whitespace is dropped before decoding. Invalid UTF-8 is replaced, not
/// rejected.
pub fn decode_text(encoded: &str) -> std::result::Result<String, base64::DecodeError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = general_purpose::STANDARD.decode(compact)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn decode_field(name: &str, value: Option<String>) -> Result<Option<String>> {
    value
        .map(|v| {
            decode_text(&v)
                .map_err(|e| JudgeError::InvalidResponse(format!("{name} is not base64: {e}")))
        })
        .transpose()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

/// The judge reports time as a decimal string ("0.012"); accept numbers too.
fn seconds<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        match Option::<NumberOrString>::deserialize(deserializer)? {
            Some(NumberOrString::Number(n)) => Some(n),
            Some(NumberOrString::String(s)) => s.trim().parse().ok(),
            None => None,
        },
    )
}
