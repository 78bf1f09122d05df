//! Sync reconciliation logic.
//!
//! Computes the desired state for an `Internet` parent: probe the three
//! websites concurrently, fold the outcomes into the status object, and
//! attach the production-test Deployment when the internet is reachable
//! and the parent asked for it.

use crate::error::HookError;
use crate::manifest;
use hook_api::{SyncRequest, SyncResponse, SyncStatus};
use probe_client::ProberTrait;
use tracing::{debug, info};

/// URLs probed on every sync.
#[derive(Debug, Clone)]
pub struct ProbeTargets {
    /// Google probe URL
    pub google: String,
    /// Amazon probe URL
    pub amazon: String,
    /// eBay probe URL
    pub ebay: String,
}

impl Default for ProbeTargets {
    fn default() -> Self {
        Self {
            google: "https://www.google.com".to_string(),
            amazon: "https://www.amazon.com".to_string(),
            ebay: "https://www.ebay.com".to_string(),
        }
    }
}

/// Reconciles `Internet` parents into desired status and children.
pub struct Reconciler {
    prober: Box<dyn ProberTrait + Send + Sync>,
    targets: ProbeTargets,
}

impl Reconciler {
    /// Creates a new reconciler instance.
    pub fn new(prober: impl ProberTrait + Send + Sync + 'static, targets: ProbeTargets) -> Self {
        Self {
            prober: Box::new(prober),
            targets,
        }
    }

    /// Compute the desired state for one sync invocation.
    ///
    /// All three probes run concurrently and are joined before the status
    /// is assembled; an unreachable site marks its flag false rather than
    /// failing the sync.
    pub async fn reconcile(&self, request: &SyncRequest) -> Result<SyncResponse, HookError> {
        let parent = &request.parent;
        info!(
            "Reconciling resource: {}/{} > {}",
            parent.api_version.as_deref().unwrap_or("-"),
            parent.kind.as_deref().unwrap_or("-"),
            parent.metadata.name.as_deref().unwrap_or("-"),
        );
        if !request.children.is_empty() {
            debug!("Observed {} child group(s)", request.children.len());
        }
        if request.finalizing {
            debug!("Parent is finalizing");
        }

        let (google, amazon, ebay) = tokio::join!(
            self.prober.probe(&self.targets.google),
            self.prober.probe(&self.targets.amazon),
            self.prober.probe(&self.targets.ebay),
        );
        info!(
            "Probe results: google={:?}, amazon={:?}, ebay={:?}",
            google, amazon, ebay
        );

        let ready = google.is_ok() && amazon.is_ok() && ebay.is_ok();
        let prod_tests = parent.spec.production_test_enabled;

        let status = SyncStatus {
            google_ok: google.is_ok(),
            amazon_ok: amazon.is_ok(),
            ebay_ok: ebay.is_ok(),
            prod_tests,
            ready,
        };

        let children = if ready && prod_tests {
            info!("Internet reachable and production tests enabled; attaching test Deployment");
            Some(vec![manifest::production_test_deployment()?])
        } else {
            debug!("No children desired (ready={}, prod-tests={})", ready, prod_tests);
            None
        };

        Ok(SyncResponse { status, children })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use probe_client::MockProber;

    #[test]
    fn test_default_targets_are_the_three_websites() {
        let targets = ProbeTargets::default();

        assert_eq!(targets.google, "https://www.google.com");
        assert_eq!(targets.amazon, "https://www.amazon.com");
        assert_eq!(targets.ebay, "https://www.ebay.com");
    }

    #[tokio::test]
    async fn test_ready_with_tests_enabled_attaches_deployment() {
        let targets = ProbeTargets::default();
        let prober = create_available_prober(&targets);
        let reconciler = Reconciler::new(prober, targets);

        let response = reconciler
            .reconcile(&create_test_request(true))
            .await
            .expect("Reconcile should succeed");

        assert!(response.status.ready);
        assert!(response.status.prod_tests);
        let children = response.children.expect("Children should be attached");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0]["metadata"]["name"], "internet-production-tests");
    }

    #[tokio::test]
    async fn test_ready_without_tests_enabled_attaches_nothing() {
        let targets = ProbeTargets::default();
        let prober = create_available_prober(&targets);
        let reconciler = Reconciler::new(prober, targets);

        let response = reconciler
            .reconcile(&create_test_request(false))
            .await
            .expect("Reconcile should succeed");

        assert!(response.status.ready);
        assert!(!response.status.prod_tests);
        assert!(
            response.children.is_none(),
            "No children without the production-test flag"
        );
    }

    #[tokio::test]
    async fn test_one_site_down_blocks_children_despite_flag() {
        let targets = ProbeTargets::default();
        let prober = create_available_prober(&targets);
        prober.set_unavailable(&targets.ebay);
        let reconciler = Reconciler::new(prober, targets);

        let response = reconciler
            .reconcile(&create_test_request(true))
            .await
            .expect("Reconcile should succeed");

        assert!(response.status.google_ok);
        assert!(response.status.amazon_ok);
        assert!(!response.status.ebay_ok);
        assert!(!response.status.ready);
        assert!(response.status.prod_tests, "Flag is echoed even when not ready");
        assert!(
            response.children.is_none(),
            "No children while any site is down"
        );
    }

    #[tokio::test]
    async fn test_all_sites_down_reports_every_probe_flag_false() {
        // An empty mock treats every URL as unavailable.
        let reconciler = Reconciler::new(MockProber::new(), ProbeTargets::default());

        let response = reconciler
            .reconcile(&create_test_request(true))
            .await
            .expect("Reconcile should succeed");

        assert_eq!(
            response.status,
            SyncStatus {
                google_ok: false,
                amazon_ok: false,
                ebay_ok: false,
                prod_tests: true,
                ready: false,
            }
        );
        assert!(response.children.is_none());
    }

    #[tokio::test]
    async fn test_flag_disabled_still_reports_probe_outcomes() {
        let targets = ProbeTargets::default();
        let prober = create_available_prober(&targets);
        prober.set_unavailable(&targets.google);
        let reconciler = Reconciler::new(prober, targets);

        let response = reconciler
            .reconcile(&create_test_request(false))
            .await
            .expect("Reconcile should succeed");

        assert!(!response.status.google_ok);
        assert!(response.status.amazon_ok);
        assert!(response.status.ebay_ok);
        assert!(!response.status.ready);
        assert!(!response.status.prod_tests);
        assert!(response.children.is_none());
    }
}
