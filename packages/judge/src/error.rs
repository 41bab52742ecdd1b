use common::UnsupportedLanguage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JudgeError {
    #[error(transparent)]
    UnsupportedLanguage(#[from] UnsupportedLanguage),

    /// Transport failure or non-success HTTP status from the judge.
    #[error("Judge unavailable: {0}")]
    Unavailable(String),

    /// The judge answered, but the body could not be understood.
    #[error("Invalid judge response: {0}")]
    InvalidResponse(String),

    /// The judge accepted the job but never reported a terminal status.
    #[error("Execution did not finish after {attempts} status checks")]
    Timeout { attempts: u32 },

    #[error("Execution cancelled")]
    Cancelled,

    #[error("Invalid judge configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for JudgeError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            JudgeError::InvalidResponse(e.to_string())
        } else {
            JudgeError::Unavailable(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, JudgeError>;
