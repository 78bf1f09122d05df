//! Website Reachability Prober
//!
//! A small client library for checking whether external websites answer
//! HTTP GET requests. Each probe is a single request with no retries and no
//! timeout; the response body is discarded and only reachability is
//! reported.
//!
//! # Example
//!
//! ```no_run
//! use probe_client::{HttpProber, ProberTrait};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let prober = HttpProber::new()?;
//!
//! // Failures collapse to Unavailable instead of propagating
//! let outcome = prober.probe("https://www.google.com").await;
//! if outcome.is_ok() {
//!     println!("google answers");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod probe_trait;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::HttpProber;
pub use error::ProbeError;
pub use models::Availability;
pub use probe_trait::ProberTrait;
#[cfg(feature = "test-util")]
pub use mock::MockProber;
