//! HTTP prober
//!
//! Issues plain GET requests against probe targets. A probe succeeds when
//! the target answers with a 2xx status; the body is drained and discarded.

use crate::error::ProbeError;
use crate::probe_trait::ProberTrait;
use reqwest::Client;
use tracing::debug;

/// Website prober backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    /// Create a new prober
    ///
    /// No request timeout is configured: a slow target keeps the probe
    /// pending instead of being misreported as down.
    pub fn new() -> Result<Self, ProbeError> {
        let client = Client::builder().build().map_err(ProbeError::Http)?;

        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ProberTrait for HttpProber {
    async fn check(&self, url: &str) -> Result<(), ProbeError> {
        debug!("Probing {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::Status(status));
        }

        // Drain the body; its content is irrelevant to reachability.
        response.bytes().await?;

        Ok(())
    }
}
