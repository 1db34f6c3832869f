//! Lift feed client error types.

/// Errors from the lift-disruption feed client.
#[derive(Debug, thiserror::Error)]
pub enum TflError {
    /// HTTP request failed before a response was obtained (network error, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body did not match the expected feed shape
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Mock feed fixture could not be read
    #[error("fixture error: {message}")]
    Fixture { message: String },
}

impl TflError {
    /// The message shown on the dashboard for any fetch failure.
    ///
    /// Transport, status and decode failures are indistinguishable to the
    /// viewer; the detailed variant goes to the log instead.
    pub fn user_message(&self) -> String {
        "Failed to fetch data".to_string()
    }
}
