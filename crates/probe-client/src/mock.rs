//! Mock prober for unit testing
//!
//! This module provides an in-memory implementation of ProberTrait that
//! answers from a configured outcome table instead of the network, so
//! controller tests can exercise every reachability combination
//! deterministically.

use crate::error::ProbeError;
use crate::models::Availability;
use crate::probe_trait::ProberTrait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock prober for testing
///
/// URLs with no configured outcome are treated as unavailable.
#[derive(Debug, Clone)]
pub struct MockProber {
    outcomes: Arc<Mutex<HashMap<String, Availability>>>,
}

impl MockProber {
    /// Create a new mock prober with an empty outcome table
    pub fn new() -> Self {
        Self {
            outcomes: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Mark a URL as reachable (for test setup)
    pub fn set_available(&self, url: impl Into<String>) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(url.into(), Availability::Ok);
    }

    /// Mark a URL as unreachable (for test setup)
    pub fn set_unavailable(&self, url: impl Into<String>) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(url.into(), Availability::Unavailable);
    }
}

impl Default for MockProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ProberTrait for MockProber {
    async fn check(&self, url: &str) -> Result<(), ProbeError> {
        let outcome = self.outcomes.lock().unwrap().get(url).copied();

        match outcome {
            Some(Availability::Ok) => Ok(()),
            _ => Err(ProbeError::Status(StatusCode::SERVICE_UNAVAILABLE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_url_is_unavailable() {
        let prober = MockProber::new();

        let outcome = prober.probe("https://www.google.com").await;
        assert_eq!(outcome, Availability::Unavailable);
    }

    #[tokio::test]
    async fn test_configured_outcomes_are_reported() {
        let prober = MockProber::new();
        prober.set_available("https://www.google.com");
        prober.set_unavailable("https://www.ebay.com");

        assert_eq!(
            prober.probe("https://www.google.com").await,
            Availability::Ok
        );
        assert_eq!(
            prober.probe("https://www.ebay.com").await,
            Availability::Unavailable
        );
    }
}
