//! Fetch scheduling and state publication.
//!
//! One scheduler owns the feed lifecycle: it runs fetch attempts,
//! stamps each with a generation token, and publishes outcomes on a
//! single watch channel. Only the newest attempt may publish its
//! outcome, so consumers never see a stale payload overwrite a fresh
//! one.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::tfl::{Disruption, TflError};

use super::config::FeedConfig;
use super::snapshot::FeedSnapshot;

/// Trait for fetching the current lift disruption list.
///
/// This abstraction allows the scheduler to be driven by the real TfL
/// client, the mock feed, or scripted sources in tests.
pub trait DisruptionSource: Send + Sync + 'static {
    /// Fetch the full current disruption list.
    fn get_disruptions(&self)
    -> impl Future<Output = Result<Vec<Disruption>, TflError>> + Send;
}

/// Scheduler-internal state guarded by one lock.
struct Inner {
    /// Token of the most recently initiated attempt. An attempt may
    /// only publish its outcome while it still holds this value.
    generation: u64,

    /// Handle for the polling task, if one is running.
    timer: Option<JoinHandle<()>>,
}

/// Drives periodic fetches and publishes every state transition.
///
/// Cloning is cheap and all clones share the same feed: the polling
/// task itself runs on a clone.
pub struct FeedScheduler<S> {
    source: Arc<S>,
    sender: watch::Sender<FeedSnapshot>,
    inner: Arc<Mutex<Inner>>,
    poll_interval: Duration,
}

impl<S> Clone for FeedScheduler<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            sender: self.sender.clone(),
            inner: Arc::clone(&self.inner),
            poll_interval: self.poll_interval,
        }
    }
}

impl<S: DisruptionSource> FeedScheduler<S> {
    /// Create a scheduler over the given source.
    ///
    /// The published snapshot starts as `Loading`; nothing is fetched
    /// until [`start`](Self::start) or [`fetch_once`](Self::fetch_once)
    /// is called.
    pub fn new(source: S, config: &FeedConfig) -> Self {
        let (sender, _) = watch::channel(FeedSnapshot::loading());

        Self {
            source: Arc::new(source),
            sender,
            inner: Arc::new(Mutex::new(Inner {
                generation: 0,
                timer: None,
            })),
            poll_interval: config.poll_interval(),
        }
    }

    /// Subscribe to published snapshots.
    ///
    /// The receiver immediately holds the current snapshot, so a
    /// subscriber never has to wait for the next transition to render.
    pub fn subscribe(&self) -> watch::Receiver<FeedSnapshot> {
        self.sender.subscribe()
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> FeedSnapshot {
        self.sender.borrow().clone()
    }

    /// Begin polling: fetch immediately, then again at every interval.
    ///
    /// Calling `start` while polling is already active does nothing.
    pub async fn start(&self) {
        let mut inner = self.inner.lock().await;

        let running = inner.timer.as_ref().is_some_and(|t| !t.is_finished());
        if running {
            return;
        }

        let scheduler = self.clone();
        inner.timer = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(scheduler.poll_interval);
            loop {
                // The first tick completes immediately, giving the
                // startup fetch.
                interval.tick().await;
                scheduler.fetch_once().await;
            }
        }));
    }

    /// Stop polling and discard the outcome of any in-flight attempt.
    ///
    /// The published snapshot stays at whatever was last observed. A
    /// later `start` or `fetch_once` begins a fresh attempt as normal.
    pub async fn stop(&self) {
        let mut inner = self.inner.lock().await;

        if let Some(timer) = inner.timer.take() {
            timer.abort();
        }

        // Invalidate every attempt initiated before this point, so a
        // late resolution cannot publish.
        inner.generation += 1;
    }

    /// Run one fetch attempt to completion.
    ///
    /// Publishes `Loading`, awaits the source, then publishes `Ready`
    /// or `Error` unless a newer attempt (or a `stop`) superseded this
    /// one while it was in flight.
    pub async fn fetch_once(&self) {
        let token = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            // Publish inside the critical section so a competing
            // attempt cannot land its outcome between our bump and our
            // Loading publish.
            self.sender.send_replace(FeedSnapshot::loading());
            inner.generation
        };

        let result = self.source.get_disruptions().await;

        let inner = self.inner.lock().await;
        if inner.generation != token {
            debug!("discarding outcome of superseded fetch");
            return;
        }

        let snapshot = match result {
            Ok(disruptions) => {
                debug!(count = disruptions.len(), "fetched lift disruptions");
                FeedSnapshot::ready(disruptions)
            }
            Err(e) => {
                warn!(error = %e, "lift disruption fetch failed");
                FeedSnapshot::error(e.user_message())
            }
        };
        self.sender.send_replace(snapshot);
    }
}
