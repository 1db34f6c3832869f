//! TfL Unified API HTTP client for the lift-disruptions feed.

use std::time::Duration;

use crate::feed::DisruptionSource;

use super::error::TflError;
use super::types::Disruption;

/// Default base URL for the TfL Unified API.
const DEFAULT_BASE_URL: &str = "https://api.tfl.gov.uk";

/// Path of the lift disruptions feed, relative to the base URL.
const LIFT_DISRUPTIONS_PATH: &str = "/Disruptions/Lifts/v2/";

/// Configuration for the TfL client.
#[derive(Debug, Clone)]
pub struct TflConfig {
    /// Application key for the Unified API. The feed also serves anonymous
    /// requests at a lower rate limit, so this is optional.
    pub app_key: Option<String>,
    /// Base URL for the API (defaults to production TfL)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TflConfig {
    /// Create a config with no application key (anonymous access).
    pub fn new() -> Self {
        Self {
            app_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set the application key.
    pub fn with_app_key(mut self, key: impl Into<String>) -> Self {
        self.app_key = Some(key.into());
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for TflConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the TfL lift-disruptions feed.
#[derive(Debug, Clone)]
pub struct TflClient {
    http: reqwest::Client,
    base_url: String,
    app_key: Option<String>,
}

impl TflClient {
    /// Create a new TfL client with the given configuration.
    pub fn new(config: TflConfig) -> Result<Self, TflError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            app_key: config.app_key,
        })
    }

    /// Fetch the current list of lift disruptions.
    ///
    /// Fails on transport errors, non-success statuses, and bodies that do
    /// not decode as a disruption array.
    pub async fn get_disruptions(&self) -> Result<Vec<Disruption>, TflError> {
        let url = format!("{}{}", self.base_url, LIFT_DISRUPTIONS_PATH);

        let mut request = self.http.get(&url);
        if let Some(key) = &self.app_key {
            request = request.query(&[("app_key", key.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TflError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| TflError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl DisruptionSource for TflClient {
    async fn get_disruptions(&self) -> Result<Vec<Disruption>, TflError> {
        TflClient::get_disruptions(self).await
    }
}
