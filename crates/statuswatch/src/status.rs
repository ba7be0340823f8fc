use serde::{Deserialize, Serialize};

/// Status of a monitored component, as understood by the status page.
///
/// The serialized form of each variant is part of the external reporting
/// contract and must never change. "No status reported yet" is not a
/// variant; callers track it as `Option<Status>`, so it can never leak into
/// a report.
///
/// Only `Operational` and `MajorOutage` are ever derived from a probe
/// outcome. The remaining variants exist for manual use on the status page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Operational,
    DegradedPerformance,
    PartialOutage,
    MajorOutage,
    UnderMaintenance,
}

impl Status {
    /// Stable string token used by the status-page API.
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Operational => "operational",
            Status::DegradedPerformance => "degraded_performance",
            Status::PartialOutage => "partial_outage",
            Status::MajorOutage => "major_outage",
            Status::UnderMaintenance => "under_maintenance",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_tokens_are_stable() {
        assert_eq!(Status::Operational.to_string(), "operational");
        assert_eq!(Status::DegradedPerformance.to_string(), "degraded_performance");
        assert_eq!(Status::PartialOutage.to_string(), "partial_outage");
        assert_eq!(Status::MajorOutage.to_string(), "major_outage");
        assert_eq!(Status::UnderMaintenance.to_string(), "under_maintenance");
    }

    #[test]
    fn serde_tokens_match_display() {
        for status in [
            Status::Operational,
            Status::DegradedPerformance,
            Status::PartialOutage,
            Status::MajorOutage,
            Status::UnderMaintenance,
        ] {
            let token = serde_json::to_value(status).unwrap();
            assert_eq!(token, serde_json::Value::String(status.to_string()));
        }
    }

    #[test]
    fn deserializes_from_wire_token() {
        let status: Status = serde_json::from_str("\"partial_outage\"").unwrap();
        assert_eq!(status, Status::PartialOutage);
    }
}
