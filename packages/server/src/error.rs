use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::UnsupportedLanguage;
use judge::JudgeError;
use sea_orm::DbErr;
use serde::Serialize;

use crate::store::StoreError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`,
    /// `UNSUPPORTED_LANGUAGE`, `NOT_FOUND`, `BUILDATHON_LOCKED`,
    /// `JUDGE_UNAVAILABLE`, `EXECUTION_TIMEOUT`, `SERVICE_UNAVAILABLE`,
    /// `PERSISTENCE_FAILURE`, `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Source code must not be empty")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    /// Missing or malformed input, caught before any judge or storage call.
    Validation(String),
    UnsupportedLanguage(String),
    NotFound(String),
    BuildathonLocked,
    JudgeUnavailable(String),
    /// The judge accepted the job but never finished it.
    ExecutionTimeout {
        attempts: u32,
    },
    /// The run was abandoned because the server is shutting down.
    Cancelled,
    Persistence(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                },
            ),
            AppError::UnsupportedLanguage(language) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "UNSUPPORTED_LANGUAGE",
                    message: format!("Unsupported language: {language}"),
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    code: "NOT_FOUND",
                    message: msg,
                },
            ),
            AppError::BuildathonLocked => (
                StatusCode::FORBIDDEN,
                ErrorBody {
                    code: "BUILDATHON_LOCKED",
                    message: "Submit a correct flag to unlock the buildathon".into(),
                },
            ),
            AppError::JudgeUnavailable(detail) => {
                tracing::warn!("Judge unavailable: {}", detail);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorBody {
                        code: "JUDGE_UNAVAILABLE",
                        message: "Code execution failed".into(),
                    },
                )
            }
            AppError::ExecutionTimeout { attempts } => (
                StatusCode::GATEWAY_TIMEOUT,
                ErrorBody {
                    code: "EXECUTION_TIMEOUT",
                    message: format!(
                        "The judge accepted the code but did not finish after {attempts} status checks"
                    ),
                },
            ),
            AppError::Cancelled => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorBody {
                    code: "SERVICE_UNAVAILABLE",
                    message: "Server is shutting down".into(),
                },
            ),
            AppError::Persistence(detail) => {
                tracing::error!("Persistence failure: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "PERSISTENCE_FAILURE",
                        message: "Failed to save data".into(),
                    },
                )
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: "An unexpected error occurred".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<JudgeError> for AppError {
    fn from(err: JudgeError) -> Self {
        match err {
            JudgeError::UnsupportedLanguage(e) => e.into(),
            JudgeError::Timeout { attempts } => AppError::ExecutionTimeout { attempts },
            JudgeError::Cancelled => AppError::Cancelled,
            JudgeError::Unavailable(detail) | JudgeError::InvalidResponse(detail) => {
                AppError::JudgeUnavailable(detail)
            }
            JudgeError::Config(detail) => AppError::Internal(detail),
        }
    }
}

impl From<UnsupportedLanguage> for AppError {
    fn from(err: UnsupportedLanguage) -> Self {
        AppError::UnsupportedLanguage(err.key().to_string())
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => AppError::NotFound(format!("{what} not found")),
            other => AppError::Persistence(other.to_string()),
        }
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::Persistence(err.to_string())
    }
}
