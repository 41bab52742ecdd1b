pub mod execution;
pub mod judge_status;
pub mod language;
pub mod output;

pub use execution::{ExecutionResult, ExecutionToken, SubmissionRequest};
pub use judge_status::JudgeStatus;
pub use language::{Language, UnsupportedLanguage};
pub use output::{FormattedOutput, NO_OUTPUT, format_result, validate_output};
