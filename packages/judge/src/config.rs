use std::time::Duration;

use serde::Deserialize;

/// What the poller does when a single status check fails at the transport
/// level.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PollErrorPolicy {
    /// The failed check uses up one attempt and polling continues. Once the
    /// budget is spent the run ends with a timeout.
    #[default]
    ConsumeAttempt,
    /// The first failed check aborts the run with the transport error.
    FailFast,
}

/// Connection and polling settings for the judge service.
#[derive(Debug, Deserialize, Clone)]
pub struct JudgeConfig {
    /// Base URL of the judge API. Default: "http://localhost:2358".
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Token sent in `auth_header` on every request. None disables auth.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Header carrying the token. Default: "X-Auth-Token".
    /// Use "X-RapidAPI-Key" for the hosted variant.
    #[serde(default = "default_auth_header")]
    pub auth_header: String,
    /// When set, sent as `X-RapidAPI-Host`.
    #[serde(default)]
    pub rapidapi_host: Option<String>,
    /// Delay before each status check, in milliseconds. Default: 1000.
    #[serde(default = "default_poll_delay_ms")]
    pub poll_delay_ms: u64,
    /// Status checks allowed before giving up. Default: 10.
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,
    /// Per-request HTTP timeout in seconds. Default: 10.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Ask the judge to answer the submit call only once the run finished.
    /// Default: false.
    #[serde(default)]
    pub wait: bool,
    #[serde(default)]
    pub poll_error_policy: PollErrorPolicy,
    /// CPU time limit applied when a request does not carry one (seconds).
    #[serde(default)]
    pub cpu_time_limit: Option<f64>,
    /// Memory limit applied when a request does not carry one (kilobytes).
    #[serde(default)]
    pub memory_limit: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:2358".into()
}
fn default_auth_header() -> String {
    "X-Auth-Token".into()
}
fn default_poll_delay_ms() -> u64 {
    1000
}
fn default_max_poll_attempts() -> u32 {
    10
}
fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_token: None,
            auth_header: default_auth_header(),
            rapidapi_host: None,
            poll_delay_ms: default_poll_delay_ms(),
            max_poll_attempts: default_max_poll_attempts(),
            request_timeout_secs: default_request_timeout_secs(),
            wait: false,
            poll_error_policy: PollErrorPolicy::default(),
            cpu_time_limit: None,
            memory_limit: None,
        }
    }
}

impl JudgeConfig {
    pub fn poll_delay(&self) -> Duration {
        Duration::from_millis(self.poll_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Worst-case time spent polling a single run.
    pub fn poll_budget(&self) -> Duration {
        self.poll_delay() * self.max_poll_attempts
    }
}
