//! Data transfer objects for web responses.

use std::collections::HashMap;

use serde::Serialize;

use crate::feed::{FeedSnapshot, FeedState};
use crate::stats::DerivedStats;
use crate::tfl::Disruption;

/// Response for the disruption list endpoint.
#[derive(Debug, Serialize)]
pub struct DisruptionsResponse {
    /// Feed lifecycle: `"loading"`, `"ready"` or `"error"`.
    pub status: &'static str,

    /// User-facing error message, set only when `status` is `"error"`.
    pub error: Option<String>,

    /// RFC 3339 time of the fetch that produced the payload.
    pub fetched_at: Option<String>,

    /// The current disruption list. Empty unless `status` is `"ready"`.
    pub disruptions: Vec<Disruption>,
}

impl DisruptionsResponse {
    /// Create from a published feed snapshot.
    pub fn from_snapshot(snapshot: &FeedSnapshot) -> Self {
        match &snapshot.state {
            FeedState::Loading => Self {
                status: "loading",
                error: None,
                fetched_at: None,
                disruptions: Vec::new(),
            },
            FeedState::Ready(disruptions) => Self {
                status: "ready",
                error: None,
                fetched_at: snapshot.fetched_at.map(|t| t.to_rfc3339()),
                disruptions: disruptions.clone(),
            },
            FeedState::Error(message) => Self {
                status: "error",
                error: Some(message.clone()),
                fetched_at: None,
                disruptions: Vec::new(),
            },
        }
    }
}

/// Response for the statistics endpoint.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    /// Total number of disruptions.
    pub total: usize,

    /// Number of distinct stations with at least one disruption.
    pub unique_stations: usize,

    /// Disruption count per station name.
    pub station_frequency: HashMap<String, usize>,

    /// The first few disruptions, in feed order.
    pub preview: Vec<Disruption>,
}

impl StatsResponse {
    /// Create from derived statistics.
    pub fn from_stats(stats: &DerivedStats) -> Self {
        Self {
            total: stats.total,
            unique_stations: stats.unique_stations,
            station_frequency: stats.station_frequency.clone(),
            preview: stats.preview.clone(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
