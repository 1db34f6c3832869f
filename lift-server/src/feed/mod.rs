//! Disruption feed lifecycle.
//!
//! This module owns the polling loop that keeps the dashboard current:
//! "fetch now, fetch again every five minutes, and publish every state
//! transition on one channel."
//!
//! Consumers subscribe once and render whatever snapshot they hold;
//! they never fetch or recount anything themselves.

mod config;
mod scheduler;
mod snapshot;

pub use config::FeedConfig;
pub use scheduler::{DisruptionSource, FeedScheduler};
pub use snapshot::{FeedSnapshot, FeedState};
