use std::sync::Arc;

use anyhow::Context;
use judge::{ExecutionPoller, HttpJudgeClient, PollSettings};
use tokio_util::sync::CancellationToken;
use tracing::info;

use server::build_router;
use server::config::AppConfig;
use server::database::init_db;
use server::state::AppState;
use server::store::{HackathonStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context("Failed to load config")?;

    let store: Arc<dyn HackathonStore> = match &config.database.url {
        Some(url) => {
            let db = init_db(url, &config.database)
                .await
                .context("Failed to connect to database")?;
            info!("Using PostgreSQL store");
            Arc::new(PgStore::new(db))
        }
        None => {
            info!("No database configured, using in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let client = HttpJudgeClient::new(&config.judge).context("Invalid judge configuration")?;
    let settings = PollSettings::from(&config.judge);
    info!(
        base_url = %config.judge.base_url,
        poll_delay_ms = config.judge.poll_delay_ms,
        max_poll_attempts = settings.max_attempts,
        wait = settings.wait,
        poll_budget = ?config.judge.poll_budget(),
        "Judge client ready"
    );

    let shutdown = CancellationToken::new();
    let state = AppState {
        store,
        poller: Arc::new(ExecutionPoller::new(Arc::new(client), settings)),
        scoring: config.scoring,
        shutdown: shutdown.clone(),
    };
    let app = build_router(state, &config.server.cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C and cancels runs still polling the judge.
async fn shutdown_signal(shutdown: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested, cancelling in-flight runs");
    shutdown.cancel();
}
