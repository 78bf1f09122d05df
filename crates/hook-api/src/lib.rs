//! Sync Hook API Types
//!
//! Typed request/response schema for the composite-controller sync webhook.
//! Metacontroller POSTs the observed parent (plus any observed children) to
//! the hook and expects the desired status/children back; these types pin
//! that contract down so malformed payloads are rejected at the boundary
//! instead of failing somewhere inside the reconciler.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
