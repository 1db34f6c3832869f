//! Polling configuration for the disruption feed.

use std::time::Duration;

/// Configuration for the fetch scheduler.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Milliseconds between fetch attempts once polling starts.
    pub poll_interval_ms: u64,
}

impl FeedConfig {
    /// Create a configuration with the given poll interval.
    pub fn new(poll_interval_ms: u64) -> Self {
        Self { poll_interval_ms }
    }

    /// Returns the poll interval as a Duration.
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 300_000, // 5 minutes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = FeedConfig::default();

        assert_eq!(config.poll_interval_ms, 300_000);
        assert_eq!(config.poll_interval(), Duration::from_secs(300));
    }

    #[test]
    fn custom_config() {
        let config = FeedConfig::new(1_000);

        assert_eq!(config.poll_interval(), Duration::from_secs(1));
    }
}
