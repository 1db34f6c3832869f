//! Mock lift feed for testing without API access.
//!
//! Serves canned disruptions from a JSON file or from memory,
//! as if they were live API responses.

use std::path::Path;
use std::sync::Arc;

use crate::feed::DisruptionSource;

use super::error::TflError;
use super::types::Disruption;

/// Mock feed that serves disruptions loaded from a JSON fixture.
///
/// This is useful for development and testing without needing a real TfL app key.
#[derive(Clone)]
pub struct MockLiftFeed {
    disruptions: Arc<Vec<Disruption>>,
}

impl MockLiftFeed {
    /// Create a mock feed by loading a JSON file containing an array of disruptions.
    ///
    /// The file uses the same shape as the live API response, so a captured
    /// response body can be dropped in directly.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, TflError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| TflError::Fixture {
            message: format!("Failed to read {:?}: {}", path, e),
        })?;

        let disruptions: Vec<Disruption> =
            serde_json::from_str(&json).map_err(|e| TflError::Fixture {
                message: format!("Failed to parse {:?}: {}", path, e),
            })?;

        Ok(Self {
            disruptions: Arc::new(disruptions),
        })
    }

    /// Create a mock feed from in-memory disruptions.
    pub fn with_disruptions(disruptions: Vec<Disruption>) -> Self {
        Self {
            disruptions: Arc::new(disruptions),
        }
    }

    /// Fetch the canned disruptions.
    ///
    /// Mimics the real `TflClient::get_disruptions` interface. The data is
    /// static, so every call returns the same list.
    pub async fn get_disruptions(&self) -> Result<Vec<Disruption>, TflError> {
        Ok(self.disruptions.as_ref().clone())
    }
}

impl DisruptionSource for MockLiftFeed {
    async fn get_disruptions(&self) -> Result<Vec<Disruption>, TflError> {
        MockLiftFeed::get_disruptions(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn load_fixture_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"stopPointName":"King's Cross","message":"Lift out of service","naptanCode":"940GZZLUKSX","outageStartArea":"Street","outageEndArea":"Ticket hall"}}]"#
        )
        .unwrap();

        let feed = MockLiftFeed::new(file.path()).unwrap();
        let disruptions = feed.get_disruptions().await.unwrap();

        assert_eq!(disruptions.len(), 1);
        assert_eq!(disruptions[0].stop_point_name, "King's Cross");
        assert_eq!(disruptions[0].naptan_code, "940GZZLUKSX");
    }

    #[tokio::test]
    async fn in_memory_disruptions_are_served_unchanged() {
        let disruptions = vec![
            Disruption {
                stop_point_name: "Bank".to_string(),
                message: "Lift 3 out of service".to_string(),
                naptan_code: "940GZZLUBNK".to_string(),
                outage_start_area: "Street".to_string(),
                outage_end_area: "Northern line platforms".to_string(),
            },
            Disruption {
                stop_point_name: "Vauxhall".to_string(),
                message: "Lift under repair".to_string(),
                naptan_code: "940GZZLUVXL".to_string(),
                outage_start_area: "Ticket hall".to_string(),
                outage_end_area: "Platforms".to_string(),
            },
        ];

        let feed = MockLiftFeed::with_disruptions(disruptions.clone());
        let served = feed.get_disruptions().await.unwrap();

        assert_eq!(served, disruptions);
    }

    #[test]
    fn missing_file_returns_error() {
        let result = MockLiftFeed::new("no/such/fixture.json");
        assert!(result.is_err());
    }

    #[test]
    fn invalid_json_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let result = MockLiftFeed::new(file.path());
        assert!(matches!(result, Err(TflError::Fixture { .. })));
    }
}
