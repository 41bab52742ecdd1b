//! Client for the remote code-execution judge and the poller that turns its
//! asynchronous submit/status protocol into a single call.

pub mod client;
pub mod config;
pub mod error;
pub mod poller;
pub mod wire;

pub use client::{HttpJudgeClient, JudgeClient, WaitedSubmission};
pub use config::{JudgeConfig, PollErrorPolicy};
pub use error::{JudgeError, Result};
pub use poller::{ExecutionPoller, PollSettings, PollState, Sleeper, TokioSleeper};

#[cfg(any(test, feature = "mock"))]
pub use client::MockJudgeClient;
#[cfg(any(test, feature = "mock"))]
pub use poller::MockSleeper;
