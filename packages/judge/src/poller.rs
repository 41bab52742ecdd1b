//! Drives a [`JudgeClient`] through submit → poll → completion.
//!
//! A run moves through [`PollState`]: it is `Submitted` once the judge hands
//! back a token, stays in `Polling` while status checks report a queued or
//! processing job, and ends either `Terminal` (a finished result) or
//! `TimedOut` (attempt budget spent). The worst-case wait is
//! `max_attempts × delay`; there is no separate wall-clock deadline.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use common::{ExecutionResult, ExecutionToken, SubmissionRequest};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

use crate::client::JudgeClient;
use crate::config::{JudgeConfig, PollErrorPolicy};
use crate::error::{JudgeError, Result};

/// Suspension used between status checks.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// [`Sleeper`] backed by the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PollSettings {
    pub delay: Duration,
    pub max_attempts: u32,
    pub error_policy: PollErrorPolicy,
    /// Submit with `wait=true` and only poll if the inline answer is not final.
    pub wait: bool,
}

impl From<&JudgeConfig> for PollSettings {
    fn from(config: &JudgeConfig) -> Self {
        Self {
            delay: config.poll_delay(),
            max_attempts: config.max_poll_attempts,
            error_policy: config.poll_error_policy,
            wait: config.wait,
        }
    }
}

impl Default for PollSettings {
    fn default() -> Self {
        Self::from(&JudgeConfig::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PollState {
    Submitted(ExecutionToken),
    Polling {
        token: ExecutionToken,
        attempts: u32,
    },
    Terminal(ExecutionResult),
    TimedOut {
        attempts: u32,
    },
}

pub struct ExecutionPoller {
    client: Arc<dyn JudgeClient>,
    sleeper: Arc<dyn Sleeper>,
    settings: PollSettings,
}

impl ExecutionPoller {
    pub fn new(client: Arc<dyn JudgeClient>, settings: PollSettings) -> Self {
        Self {
            client,
            sleeper: Arc::new(TokioSleeper),
            settings,
        }
    }

    /// Replace the timer, e.g. with one that returns immediately in tests.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Run `request` to completion.
    ///
    /// Returns the first terminal result. Fails with [`JudgeError::Timeout`]
    /// when the attempt budget runs out and with [`JudgeError::Cancelled`] if
    /// `cancel` fires; a result arriving after cancellation is discarded.
    #[instrument(skip_all, fields(language = %request.language))]
    pub async fn execute(
        &self,
        request: &SubmissionRequest,
        cancel: &CancellationToken,
    ) -> Result<ExecutionResult> {
        if cancel.is_cancelled() {
            return Err(JudgeError::Cancelled);
        }

        let mut state = self.start(request, cancel).await?;
        loop {
            state = match state {
                PollState::Terminal(result) => return Ok(result),
                PollState::TimedOut { attempts } => {
                    warn!(attempts, "Execution did not finish within poll budget");
                    return Err(JudgeError::Timeout { attempts });
                }
                PollState::Submitted(token) => PollState::Polling { token, attempts: 0 },
                PollState::Polling { token, attempts } => {
                    self.poll_once(token, attempts, cancel).await?
                }
            };
        }
    }

    async fn start(
        &self,
        request: &SubmissionRequest,
        cancel: &CancellationToken,
    ) -> Result<PollState> {
        if !self.settings.wait {
            let token = self.client.submit(request).await?;
            if cancel.is_cancelled() {
                return Err(JudgeError::Cancelled);
            }
            return Ok(PollState::Submitted(token));
        }

        let waited = self.client.submit_and_wait(request).await?;
        if cancel.is_cancelled() {
            return Err(JudgeError::Cancelled);
        }
        if waited.result.is_terminal() {
            return Ok(PollState::Terminal(waited.result));
        }
        match waited.token {
            Some(token) => {
                debug!(token = %token, "Inline result not final, falling back to polling");
                Ok(PollState::Submitted(token))
            }
            None => Err(JudgeError::InvalidResponse(
                "pending result returned without a token".into(),
            )),
        }
    }

    async fn poll_once(
        &self,
        token: ExecutionToken,
        attempts: u32,
        cancel: &CancellationToken,
    ) -> Result<PollState> {
        if attempts >= self.settings.max_attempts {
            return Ok(PollState::TimedOut { attempts });
        }
        if cancel.is_cancelled() {
            return Err(JudgeError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(JudgeError::Cancelled),
            _ = self.sleeper.sleep(self.settings.delay) => {}
        }
        // The sleep may finish in the same poll that observes cancellation.
        if cancel.is_cancelled() {
            return Err(JudgeError::Cancelled);
        }

        let attempt = attempts + 1;
        let fetched = self.client.fetch_result(&token).await;
        if cancel.is_cancelled() {
            return Err(JudgeError::Cancelled);
        }

        match fetched {
            Ok(result) if result.is_terminal() => {
                info!(token = %token, attempt, status = %result.status, "Execution finished");
                Ok(PollState::Terminal(result))
            }
            Ok(result) => {
                debug!(token = %token, attempt, status = %result.status, "Execution pending");
                Ok(PollState::Polling {
                    token,
                    attempts: attempt,
                })
            }
            Err(JudgeError::Unavailable(e))
                if self.settings.error_policy == PollErrorPolicy::ConsumeAttempt =>
            {
                warn!(token = %token, attempt, error = %e, "Status check failed");
                Ok(PollState::Polling {
                    token,
                    attempts: attempt,
                })
            }
            Err(e) => Err(e),
        }
    }
}
