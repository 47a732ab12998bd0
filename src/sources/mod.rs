//! External data sources
//!
//! Thin typed clients over the three external formats the dashboard
//! consumes:
//! - World Bank indicator API (JSON over HTTP)
//! - World Happiness Report CSV (local file or static HTTP asset)
//! - World topology in TopoJSON (local file or static HTTP asset)
//!
//! The core owns none of these formats; failures here propagate to the
//! caller untouched. There are no retries and no backoff.

mod geography;
mod survey;
mod worldbank;

pub use geography::{load_features, parse_features};
pub use survey::{load_survey, parse_survey};
pub use worldbank::{parse_indicator_response, WorldBankClient};

use thiserror::Error;

/// Errors that can occur while acquiring external data
#[derive(Error, Debug)]
pub enum SourceError {
    /// HTTP transport failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local file read failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON deserialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success HTTP status
    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// Upstream API answered with an error payload
    #[error("API error: {0}")]
    Api(String),

    /// Response parsed but did not have the expected structure
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),
}

/// Result type alias for source operations
pub type SourceResult<T> = Result<T, SourceError>;

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Read a document as text from a local path or over HTTP.
///
/// The original app serves the survey CSV and topology as static assets;
/// the CLI commonly points at local copies instead.
pub(crate) async fn load_text(client: &reqwest::Client, location: &str) -> SourceResult<String> {
    if is_url(location) {
        tracing::debug!(url = location, "fetching document");
        let response = client.get(location).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status {
                url: location.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response.text().await?)
    } else {
        tracing::debug!(path = location, "reading document");
        Ok(tokio::fs::read_to_string(location).await?)
    }
}
