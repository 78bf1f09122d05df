//! Probe outcome types

use serde::{Deserialize, Serialize};

/// Outcome of probing a single target URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// The target answered with a success status
    Ok,

    /// The target could not be reached or answered with an error
    Unavailable,
}

impl Availability {
    /// True when the target answered successfully
    pub fn is_ok(self) -> bool {
        matches!(self, Availability::Ok)
    }
}
