use crate::probe::{HealthProbe, ProbeError};
use crate::status::Status;

/// One monitored component: its reporting key, its probe, and the status the
/// status page currently shows for it.
///
/// A target is created once at startup and then moved into its supervising
/// task, which is the only code that ever touches it. No locking.
pub struct MonitoredTarget {
    component_id: String,
    probe: Box<dyn HealthProbe>,
    last_reported: Option<Status>,
}

impl MonitoredTarget {
    pub fn new(component_id: impl Into<String>, probe: Box<dyn HealthProbe>) -> Self {
        Self { component_id: component_id.into(), probe, last_reported: None }
    }

    pub fn component_id(&self) -> &str {
        &self.component_id
    }

    /// Status most recently acknowledged by the reporter. `None` until the
    /// first report succeeds, which is why the first round always reports.
    pub fn last_reported(&self) -> Option<Status> {
        self.last_reported
    }

    pub(crate) async fn check(&self) -> Result<(), ProbeError> {
        self.probe.check().await
    }

    pub(crate) fn record_reported(&mut self, status: Status) {
        self.last_reported = Some(status);
    }
}
