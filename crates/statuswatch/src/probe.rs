//! Health probes for monitored targets.
//!
//! A probe is a single check of one target: it either confirms the target is
//! healthy or fails with a [`ProbeError`]. Concrete probes capture their
//! target configuration at construction time and take no arguments.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

/// Timeout applied to every probe request.
pub const PROBE_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status code: expected success, got {0}")]
    UnexpectedStatus(u16),
}

/// A single health check of one target.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Perform one check, returning `Ok(())` when the target is healthy.
    async fn check(&self) -> Result<(), ProbeError>;
}

fn probe_client() -> Result<Client, ProbeError> {
    Ok(Client::builder().timeout(Duration::from_secs(PROBE_TIMEOUT_SECS)).build()?)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Probe that issues a GET against a service's `/health` endpoint.
pub struct HttpHealthProbe {
    client: Client,
    url: String,
}

impl HttpHealthProbe {
    pub fn new(base_url: &str) -> Result<Self, ProbeError> {
        Ok(Self { client: probe_client()?, url: join_url(base_url, "/health") })
    }
}

#[async_trait]
impl HealthProbe for HttpHealthProbe {
    async fn check(&self) -> Result<(), ProbeError> {
        let response = self.client.get(&self.url).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProbeError::UnexpectedStatus(response.status().as_u16()))
        }
    }
}

/// Probe that queries a blockchain node for the unspent outputs of a fixed
/// address. Any successful response means the node is up and answering
/// queries; the balance itself is irrelevant.
pub struct RpcBalanceProbe {
    client: Client,
    url: String,
    address: String,
}

impl RpcBalanceProbe {
    pub fn new(base_url: &str, path: &str, address: impl Into<String>) -> Result<Self, ProbeError> {
        Ok(Self {
            client: probe_client()?,
            url: join_url(base_url, path),
            address: address.into(),
        })
    }
}

#[async_trait]
impl HealthProbe for RpcBalanceProbe {
    async fn check(&self) -> Result<(), ProbeError> {
        let body = serde_json::json!({
            "jsonrpc": "1.0",
            "id": 123,
            "method": "listunspent",
            "params": [6, 9999999, [self.address.as_str()]],
        });

        let response = self.client.post(&self.url).json(&body).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProbeError::UnexpectedStatus(response.status().as_u16()))
        }
    }
}
