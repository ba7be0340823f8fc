//! Status reporting to the external status page.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::status::Status;

/// Timeout applied to every report request.
pub const REPORT_TIMEOUT_SECS: u64 = 10;

const STATUSPAGE_API_BASE: &str = "https://api.statuspage.io";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status code: expected success, got {0}")]
    UnexpectedStatus(u16),
}

/// Capability to push one component's status to an external surface.
///
/// Implementations may fail (network, auth); callers must treat a failure as
/// retryable and never let it escape their loop.
#[async_trait]
pub trait StatusReporter: Send + Sync {
    async fn report(&self, component_id: &str, status: Status) -> Result<(), ReportError>;
}

#[derive(Serialize)]
struct ComponentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    status: Status,
    showcase: bool,
}

#[derive(Serialize)]
struct UpdateRequest {
    component: ComponentUpdate,
}

/// Statuspage.io reporter: PATCHes the component identified by
/// `component_id` on a fixed page.
pub struct StatuspageReporter {
    client: Client,
    base_url: String,
    page_id: String,
    api_key: String,
}

impl StatuspageReporter {
    pub fn new(
        page_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ReportError> {
        Self::with_base_url(STATUSPAGE_API_BASE, page_id, api_key)
    }

    /// Point the reporter at a different API base. Used by tests.
    pub fn with_base_url(
        base_url: impl Into<String>,
        page_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ReportError> {
        let client = Client::builder().timeout(Duration::from_secs(REPORT_TIMEOUT_SECS)).build()?;
        let base_url = base_url.into();

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_id: page_id.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl StatusReporter for StatuspageReporter {
    async fn report(&self, component_id: &str, status: Status) -> Result<(), ReportError> {
        let url = format!(
            "{}/v1/pages/{}/components/{}",
            self.base_url, self.page_id, component_id
        );
        let body = UpdateRequest {
            component: ComponentUpdate { description: None, status, showcase: true },
        };

        let response = self
            .client
            .patch(&url)
            .query(&[("api_key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ReportError::UnexpectedStatus(response.status().as_u16()))
        }
    }
}
