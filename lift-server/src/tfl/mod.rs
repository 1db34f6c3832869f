//! TfL lift disruption feed client.
//!
//! This module provides an HTTP client for the Transport for London
//! unified API's lift disruption endpoint, which lists every lift
//! currently out of service across the TfL network.
//!
//! Key characteristics of the feed:
//! - The v2 endpoint returns a bare JSON array of disruptions
//! - Requests work without credentials, but an `app_key` query
//!   parameter raises the rate limit
//! - Outage locations are free-text area descriptions (e.g. "Street"
//!   to "Ticket hall"), not structured platform identifiers

mod client;
mod error;
mod mock;
mod types;

pub use client::{TflClient, TflConfig};
pub use error::TflError;
pub use mock::MockLiftFeed;
pub use types::Disruption;
