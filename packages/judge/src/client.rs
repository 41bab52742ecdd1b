use async_trait::async_trait;
use common::{ExecutionResult, ExecutionToken, SubmissionRequest};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use tracing::{debug, instrument};
use url::Url;

use crate::config::JudgeConfig;
use crate::error::{JudgeError, Result};
use crate::wire::{CreateSubmissionBody, SubmissionBody, TokenResponse};

/// Longest slice of an error body kept in error messages.
const ERROR_BODY_LIMIT: usize = 512;

/// Result of a submit call that asked the judge to wait for completion.
#[derive(Clone, Debug, PartialEq)]
pub struct WaitedSubmission {
    /// Present when the judge returned one; needed to keep polling if the
    /// inline result was not terminal.
    pub token: Option<ExecutionToken>,
    pub result: ExecutionResult,
}

/// Single-shot calls against the remote judge. Implementations keep no state
/// between calls.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait JudgeClient: Send + Sync {
    /// Create a submission and return the token to poll with.
    async fn submit(&self, request: &SubmissionRequest) -> Result<ExecutionToken>;

    /// Create a submission and let the judge hold the response until the run
    /// finishes.
    async fn submit_and_wait(&self, request: &SubmissionRequest) -> Result<WaitedSubmission>;

    /// One status check.
    async fn fetch_result(&self, token: &ExecutionToken) -> Result<ExecutionResult>;
}

/// [`JudgeClient`] speaking HTTP+JSON to a Judge0-compatible service.
#[derive(Debug, Clone)]
pub struct HttpJudgeClient {
    http: Client,
    base_url: String,
    cpu_time_limit: Option<f64>,
    memory_limit: Option<u64>,
}

impl HttpJudgeClient {
    pub fn new(config: &JudgeConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;
        let mut headers = HeaderMap::new();
        if let Some(token) = &config.auth_token {
            let name = HeaderName::from_bytes(config.auth_header.as_bytes())
                .map_err(|e| JudgeError::Config(format!("auth_header: {e}")))?;
            let value = HeaderValue::from_str(token)
                .map_err(|e| JudgeError::Config(format!("auth_token: {e}")))?;
            headers.insert(name, value);
        }
        if let Some(host) = &config.rapidapi_host {
            let value = HeaderValue::from_str(host)
                .map_err(|e| JudgeError::Config(format!("rapidapi_host: {e}")))?;
            headers.insert("X-RapidAPI-Host", value);
        }

        let http = Client::builder()
            .timeout(config.request_timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| JudgeError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url,
            cpu_time_limit: config.cpu_time_limit,
            memory_limit: config.memory_limit,
        })
    }

    fn body(&self, request: &SubmissionRequest) -> CreateSubmissionBody {
        let mut body = CreateSubmissionBody::encode(request);
        body.cpu_time_limit = body.cpu_time_limit.or(self.cpu_time_limit);
        body.memory_limit = body.memory_limit.or(self.memory_limit);
        body
    }

    async fn create(&self, request: &SubmissionRequest, wait: bool) -> Result<Response> {
        let url = format!(
            "{}/submissions?base64_encoded=true&wait={wait}",
            self.base_url
        );
        let response = self.http.post(url).json(&self.body(request)).send().await?;
        ensure_success(response).await
    }
}

#[async_trait]
impl JudgeClient for HttpJudgeClient {
    #[instrument(skip_all, fields(language = %request.language))]
    async fn submit(&self, request: &SubmissionRequest) -> Result<ExecutionToken> {
        let response = self.create(request, false).await?;
        let TokenResponse { token } = response.json().await?;
        debug!(token = %token, "Submission accepted by judge");
        Ok(ExecutionToken::new(token))
    }

    #[instrument(skip_all, fields(language = %request.language))]
    async fn submit_and_wait(&self, request: &SubmissionRequest) -> Result<WaitedSubmission> {
        let response = self.create(request, true).await?;
        let body: SubmissionBody = response.json().await?;
        let token = body.token.clone().map(ExecutionToken::new);
        Ok(WaitedSubmission {
            token,
            result: body.decode()?,
        })
    }

    #[instrument(skip(self), fields(token = %token))]
    async fn fetch_result(&self, token: &ExecutionToken) -> Result<ExecutionResult> {
        let url = format!(
            "{}/submissions/{}?base64_encoded=true",
            self.base_url,
            token.as_str()
        );
        let response = ensure_success(self.http.get(url).send().await?).await?;
        let body: SubmissionBody = response.json().await?;
        body.decode()
    }
}

/// Accepts absolute http(s) URLs with a host; the trailing slash is dropped.
fn parse_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw).map_err(|e| JudgeError::Config(format!("base_url: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(JudgeError::Config(format!(
            "base_url: only http and https are allowed, got {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(JudgeError::Config("base_url: missing host".into()));
    }
    Ok(url.as_str().trim_end_matches('/').to_string())
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let mut text = response.text().await.unwrap_or_default();
    if text.len() > ERROR_BODY_LIMIT {
        let mut cut = ERROR_BODY_LIMIT;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
    }
    Err(JudgeError::Unavailable(format!("HTTP {status}: {text}")))
}
