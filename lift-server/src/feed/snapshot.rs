//! Published feed state.
//!
//! A snapshot bundles the feed lifecycle state with statistics derived
//! from it, so every consumer sees a payload and its stats that agree
//! with each other.

use chrono::{DateTime, Utc};

use crate::stats::{DerivedStats, derive_stats};
use crate::tfl::Disruption;

/// Lifecycle of the disruption feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedState {
    /// A fetch attempt is in flight and no outcome has been published
    /// for it yet. Any previous payload is already cleared.
    Loading,

    /// The most recent resolved fetch succeeded.
    Ready(Vec<Disruption>),

    /// The most recent resolved fetch failed. The message is the
    /// user-facing one, not the underlying transport error.
    Error(String),
}

impl FeedState {
    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading)
    }

    /// Whether the feed holds a successfully fetched payload.
    pub fn is_ready(&self) -> bool {
        matches!(self, FeedState::Ready(_))
    }

    /// The payload, if the last fetch succeeded.
    pub fn disruptions(&self) -> Option<&[Disruption]> {
        match self {
            FeedState::Ready(disruptions) => Some(disruptions),
            _ => None,
        }
    }

    /// The user-facing error message, if the last fetch failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FeedState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// One published observation of the feed.
///
/// Stats are computed once, when the snapshot is built, so renderers
/// never recount a payload they did not fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSnapshot {
    /// Current lifecycle state.
    pub state: FeedState,

    /// Statistics derived from the payload. Zeroed while loading and
    /// after an error.
    pub stats: DerivedStats,

    /// When the payload was fetched. `None` unless `state` is `Ready`.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl FeedSnapshot {
    /// Snapshot for an attempt that has just started.
    ///
    /// Also the initial state before any fetch has run.
    pub fn loading() -> Self {
        Self {
            state: FeedState::Loading,
            stats: DerivedStats::default(),
            fetched_at: None,
        }
    }

    /// Snapshot for a successful fetch, with stats derived from the
    /// payload and the fetch time stamped.
    pub fn ready(disruptions: Vec<Disruption>) -> Self {
        let stats = derive_stats(&disruptions);
        Self {
            state: FeedState::Ready(disruptions),
            stats,
            fetched_at: Some(Utc::now()),
        }
    }

    /// Snapshot for a failed fetch. Any previously held payload is
    /// gone; the stats are zeroed to match.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            state: FeedState::Error(message.into()),
            stats: DerivedStats::default(),
            fetched_at: None,
        }
    }
}
