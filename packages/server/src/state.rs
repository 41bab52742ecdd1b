use std::sync::Arc;

use judge::ExecutionPoller;
use tokio_util::sync::CancellationToken;

use crate::config::ScoringConfig;
use crate::store::HackathonStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HackathonStore>,
    pub poller: Arc<ExecutionPoller>,
    pub scoring: ScoringConfig,
    /// Cancelled on graceful shutdown; aborts runs still waiting on the judge.
    pub shutdown: CancellationToken,
}
