use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use statuswatch::{Config, StatuspageReporter, Supervisor};
use tracing::info;

mod targets;

/// How long shutdown waits for loops to stop before aborting them.
const SHUTDOWN_GRACE_SECS: u64 = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env for local runs; deployments set the environment directly.
    let _ = dotenvy::dotenv();
    logger::init();

    let config = Config::from_env().context("invalid configuration")?;

    let reporter = StatuspageReporter::new(config.page_id.clone(), config.api_key.clone())
        .context("failed to build status reporter")?;

    let targets = targets::build(&config).context("failed to build monitored targets")?;
    info!(targets = targets.len(), base_url = %config.base_url, "starting monitoring loops");

    let mut supervisor = Supervisor::new(Arc::new(reporter));
    supervisor.spawn_all(targets);

    wait_for_termination().await?;

    info!("termination signal received, shutting down");
    supervisor.shutdown(Duration::from_secs(SHUTDOWN_GRACE_SECS)).await;

    Ok(())
}

#[cfg(unix)]
async fn wait_for_termination() -> anyhow::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate =
        signal(SignalKind::terminate()).context("failed to install SIGTERM handler")?;

    tokio::select! {
        result = tokio::signal::ctrl_c() => result.context("failed to listen for ctrl-c")?,
        _ = terminate.recv() => {}
    }

    Ok(())
}

#[cfg(not(unix))]
async fn wait_for_termination() -> anyhow::Result<()> {
    tokio::signal::ctrl_c().await.context("failed to listen for ctrl-c")
}
