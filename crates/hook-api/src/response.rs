//! Sync hook response types
//!
//! The outbound half of the sync contract: the status metacontroller writes
//! back onto the parent, and the list of desired child manifests. The
//! `children` key is omitted entirely when there is nothing to create, which
//! metacontroller treats the same as an empty list.

use serde::{Deserialize, Serialize};

/// Desired state returned from a sync hook invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse {
    /// Status object to be written to the parent's `.status`.
    pub status: SyncStatus,

    /// Desired child objects, as full manifests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<serde_json::Value>>,
}

/// Parent status, mirroring each probe outcome plus the combined verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStatus {
    /// Whether the Google probe succeeded.
    #[serde(rename = "google-ok")]
    pub google_ok: bool,

    /// Whether the Amazon probe succeeded.
    #[serde(rename = "amazon-ok")]
    pub amazon_ok: bool,

    /// Whether the eBay probe succeeded.
    #[serde(rename = "ebay-ok")]
    pub ebay_ok: bool,

    /// Echo of the parent's `production-test-enabled` flag.
    #[serde(rename = "prod-tests")]
    pub prod_tests: bool,

    /// True only when all three probes succeeded.
    pub ready: bool,
}
