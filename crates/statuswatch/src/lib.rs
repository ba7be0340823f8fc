//! Statuswatch - health-check supervision and status-page reporting
//!
//! This library provides the monitoring core for Statuswatch: one
//! independently scheduled health-check loop per component, with status
//! changes pushed to an external status page only when they happen.

pub mod config;
pub mod probe;
pub mod reporter;
pub mod shutdown;
pub mod status;
pub mod supervisor;
pub mod target;

// Re-export main types
pub use config::{Config, ConfigError};
pub use probe::{HealthProbe, HttpHealthProbe, ProbeError, RpcBalanceProbe};
pub use reporter::{ReportError, StatusReporter, StatuspageReporter};
pub use shutdown::ShutdownController;
pub use status::Status;
pub use supervisor::{CheckIntervals, Supervisor};
pub use target::MonitoredTarget;
