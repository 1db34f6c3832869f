//! Application state for the web layer.

use tokio::sync::watch;

use crate::feed::FeedSnapshot;

/// Shared application state.
///
/// Handlers read the feed through a watch receiver, so every request
/// sees the scheduler's latest published snapshot without touching the
/// scheduler itself.
#[derive(Clone)]
pub struct AppState {
    /// Latest published feed snapshot.
    pub feed: watch::Receiver<FeedSnapshot>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(feed: watch::Receiver<FeedSnapshot>) -> Self {
        Self { feed }
    }
}
