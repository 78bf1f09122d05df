//! Test utilities for controller unit tests
//!
//! This module provides helpers for building sync requests and
//! pre-configured mock probers.

#[cfg(test)]
use crate::reconciler::ProbeTargets;
#[cfg(test)]
use hook_api::{ParentMetadata, ParentResource, ParentSpec, SyncRequest};
#[cfg(test)]
use probe_client::MockProber;
#[cfg(test)]
use std::collections::BTreeMap;

/// Helper to create a sync request for an `Internet` parent
#[cfg(test)]
pub fn create_test_request(production_test_enabled: bool) -> SyncRequest {
    SyncRequest {
        parent: ParentResource {
            api_version: Some("metacontroller.github.com/v1".to_string()),
            kind: Some("Internet".to_string()),
            metadata: ParentMetadata {
                name: Some("my-internet".to_string()),
                namespace: Some("default".to_string()),
            },
            spec: ParentSpec {
                production_test_enabled,
            },
        },
        children: BTreeMap::new(),
        finalizing: false,
    }
}

/// Helper to create a mock prober with every target reachable
#[cfg(test)]
pub fn create_available_prober(targets: &ProbeTargets) -> MockProber {
    let prober = MockProber::new();
    prober.set_available(&targets.google);
    prober.set_available(&targets.amazon);
    prober.set_available(&targets.ebay);
    prober
}
