//! Monitoring supervisor - one independent check loop per target.
//!
//! Each loop repeatedly probes its target, derives a status from the
//! outcome, and reports the status only when it differs from the last one
//! the status page acknowledged. Loops share nothing and never affect one
//! another; the supervisor owns their handles and drains them on shutdown.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout, Instant};
use tracing::{error, info, warn};

use crate::reporter::StatusReporter;
use crate::shutdown::ShutdownController;
use crate::status::Status;
use crate::target::MonitoredTarget;

/// Wait between rounds after a successful probe (seconds).
pub const CHECK_INTERVAL_SECS: u64 = 30;

/// Wait between rounds after a failed probe (seconds). Failing targets are
/// probed less often to keep load off an already unhealthy dependency.
pub const FAILURE_BACKOFF_SECS: u64 = 60;

/// Inter-round pacing for a monitoring loop.
#[derive(Debug, Clone, Copy)]
pub struct CheckIntervals {
    pub healthy: Duration,
    pub failing: Duration,
}

impl Default for CheckIntervals {
    fn default() -> Self {
        Self {
            healthy: Duration::from_secs(CHECK_INTERVAL_SECS),
            failing: Duration::from_secs(FAILURE_BACKOFF_SECS),
        }
    }
}

/// Runs one monitoring loop per target and owns their lifetime.
pub struct Supervisor {
    reporter: Arc<dyn StatusReporter>,
    intervals: CheckIntervals,
    shutdown: ShutdownController,
    handles: Vec<JoinHandle<()>>,
}

impl Supervisor {
    pub fn new(reporter: Arc<dyn StatusReporter>) -> Self {
        Self::with_intervals(reporter, CheckIntervals::default())
    }

    pub fn with_intervals(reporter: Arc<dyn StatusReporter>, intervals: CheckIntervals) -> Self {
        Self { reporter, intervals, shutdown: ShutdownController::new(), handles: Vec::new() }
    }

    /// Handle for requesting shutdown from outside the supervisor.
    pub fn shutdown_controller(&self) -> ShutdownController {
        self.shutdown.clone()
    }

    /// Spawn the monitoring loop for one target. The target moves into its
    /// task; nothing else touches it afterwards.
    pub fn spawn(&mut self, target: MonitoredTarget) {
        let reporter = self.reporter.clone();
        let intervals = self.intervals;
        let shutdown = self.shutdown.clone();

        self.handles.push(tokio::spawn(async move {
            run_loop(target, reporter, intervals, shutdown).await;
        }));
    }

    pub fn spawn_all(&mut self, targets: Vec<MonitoredTarget>) {
        for target in targets {
            self.spawn(target);
        }
    }

    pub fn task_count(&self) -> usize {
        self.handles.len()
    }

    /// Request shutdown, wait up to `grace` for the loops to stop at their
    /// next wait point, and abort whatever is still running afterwards.
    pub async fn shutdown(mut self, grace: Duration) {
        self.shutdown.request();

        let deadline = Instant::now() + grace;
        for mut handle in self.handles.drain(..) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if timeout(remaining, &mut handle).await.is_err() {
                warn!("monitoring loop did not stop within grace period, aborting");
                handle.abort();
            }
        }

        info!("all monitoring loops stopped");
    }
}

/// One target's unbounded monitoring loop.
async fn run_loop(
    mut target: MonitoredTarget,
    reporter: Arc<dyn StatusReporter>,
    intervals: CheckIntervals,
    shutdown: ShutdownController,
) {
    info!(component_id = target.component_id(), "monitoring loop started");

    loop {
        let derived = match target.check().await {
            Ok(()) => Status::Operational,
            Err(error) => {
                warn!(component_id = target.component_id(), %error, "health check failed");
                Status::MajorOutage
            }
        };

        if target.last_reported() != Some(derived) {
            match reporter.report(target.component_id(), derived).await {
                Ok(()) => {
                    info!(component_id = target.component_id(), status = %derived, "status reported");
                    target.record_reported(derived);
                }
                Err(error) => {
                    // last_reported stays untouched, so the same transition
                    // is retried next round until a report goes through.
                    error!(component_id = target.component_id(), %error, "status report failed");
                }
            }
        }

        let wait = if derived == Status::MajorOutage {
            intervals.failing
        } else {
            intervals.healthy
        };

        tokio::select! {
            _ = shutdown.wait() => {
                info!(component_id = target.component_id(), "monitoring loop stopped");
                break;
            }
            _ = sleep(wait) => {}
        }
    }
}
