//! Sync hook request types
//!
//! The inbound half of the sync contract: the parent custom resource as
//! metacontroller observed it, plus the observed-children map and the
//! finalizing flag from the hook envelope. Envelope fields the reconciler
//! has no use for (`controller`, `related`) are ignored on deserialize.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A sync hook invocation as POSTed by metacontroller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncRequest {
    /// The parent custom resource being reconciled.
    pub parent: ParentResource,

    /// Observed children, keyed by `Kind.apiVersion` and then by object name.
    ///
    /// Accepted for protocol compatibility; the desired state computed by
    /// this hook does not depend on what already exists.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, BTreeMap<String, serde_json::Value>>,

    /// True when the parent is being deleted and finalize hooks are in play.
    #[serde(default)]
    pub finalizing: bool,
}

/// The parent custom resource embedded in a [`SyncRequest`].
///
/// Only the fields the reconciler reads are modeled; everything else on the
/// object is dropped on deserialize. `spec` is deliberately required so a
/// parent without one fails validation instead of reconciling to garbage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentResource {
    /// API group/version of the parent, e.g. `metacontroller.github.com/v1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    /// Kind of the parent resource.
    #[serde(default, alias = "Kind", skip_serializing_if = "Option::is_none")] // Some controllers emit capitalized "Kind"
    pub kind: Option<String>,

    /// Standard object metadata (name/namespace; the rest is ignored).
    #[serde(default)]
    pub metadata: ParentMetadata,

    /// The parent's spec. Required.
    pub spec: ParentSpec,
}

/// The subset of object metadata the hook cares about.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParentMetadata {
    /// Object name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Object namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// Spec of the parent resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParentSpec {
    /// Whether the production-test Deployment should be created once the
    /// internet is reachable. Absent means disabled.
    #[serde(rename = "production-test-enabled", default)]
    pub production_test_enabled: bool,
}
