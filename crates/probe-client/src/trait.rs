//! Prober trait for mocking
//!
//! This trait abstracts the prober to enable mocking in unit tests.
//! The concrete HttpProber implements this trait, and tests can use mock
//! implementations.

use crate::error::ProbeError;
use crate::models::Availability;
use tracing::warn;

/// Trait for probing target URLs
///
/// Implementors provide [`ProberTrait::check`]; the provided
/// [`ProberTrait::probe`] wrapper maps every failure to
/// [`Availability::Unavailable`] so callers never see probe errors.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait ProberTrait: Send + Sync {
    /// Issue a single GET against `url`, discarding the response body
    async fn check(&self, url: &str) -> Result<(), ProbeError>;

    /// Probe `url`, reporting reachability
    ///
    /// Errors are logged and collapsed to [`Availability::Unavailable`];
    /// they never propagate.
    async fn probe(&self, url: &str) -> Availability {
        match self.check(url).await {
            Ok(()) => Availability::Ok,
            Err(error) => {
                warn!("Probe of {} failed: {}", url, error);
                Availability::Unavailable
            }
        }
    }
}
