//! Internet Controller
//!
//! Sync hook backend for a metacontroller CompositeController managing
//! `Internet` parents. Each sync probes three public websites concurrently
//! and reports per-site reachability plus a combined `ready` flag on the
//! parent status. When every site answers and the parent enables production
//! tests, the desired children include a fixed test Deployment.

pub mod error;
pub mod manifest;
pub mod reconciler;
pub mod server;

#[cfg(test)]
mod test_utils;

pub use error::HookError;
pub use reconciler::{ProbeTargets, Reconciler};
pub use server::{build_router, AppState};
