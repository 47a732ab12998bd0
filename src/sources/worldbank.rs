//! World Bank indicator API client
//!
//! One endpoint is consumed:
//! `GET {base}/country/{code}/indicator/{indicator}?format=json`. The API
//! answers with a two-element JSON array - a pagination header followed by
//! the data rows, newest first. Error responses (unknown country, bad
//! indicator code) collapse to a one-element array whose header carries a
//! message list instead.

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use super::{SourceError, SourceResult};
use crate::dataset::YearPoint;

/// Rows requested per page; enough for one value per year since 1960.
const PER_PAGE: u32 = 200;

/// Client for the World Bank v2 indicator API.
#[derive(Debug, Clone)]
pub struct WorldBankClient {
    client: Client,
    base_url: String,
}

impl WorldBankClient {
    /// Create a client against the given API base URL
    /// (e.g. `https://api.worldbank.org/v2`).
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch an indicator series for a country, oldest to newest.
    ///
    /// The API delivers rows newest-first; they are reversed here so the
    /// result is in chronological order, ready to be a chart's time axis.
    pub async fn indicator(&self, country: &str, indicator: &str) -> SourceResult<Vec<YearPoint>> {
        let url = format!(
            "{}/country/{}/indicator/{}?format=json&per_page={}",
            self.base_url.trim_end_matches('/'),
            country,
            indicator,
            PER_PAGE
        );
        tracing::debug!(%url, "fetching indicator series");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(SourceError::Status {
                url,
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let points = parse_indicator_response(&body)?;
        tracing::debug!(country, indicator, points = points.len(), "indicator series fetched");
        Ok(points)
    }
}

#[derive(Deserialize)]
struct WbRow {
    date: String,
    value: Option<f64>,
}

/// Parse a World Bank indicator response body into chronological points.
///
/// Kept separate from the HTTP call so the wire format is unit-testable.
pub fn parse_indicator_response(body: &str) -> SourceResult<Vec<YearPoint>> {
    let elements: Vec<Value> = serde_json::from_str(body)?;

    let rows = match elements.get(1) {
        Some(Value::Null) | None => {
            let message = api_message(elements.first())
                .unwrap_or_else(|| "response carried no data rows".to_string());
            return Err(SourceError::Api(message));
        }
        Some(rows) => rows.clone(),
    };

    let mut rows: Vec<WbRow> = serde_json::from_value(rows)?;
    rows.reverse();

    Ok(rows
        .into_iter()
        .map(|row| YearPoint::new(row.date, row.value))
        .collect())
}

/// Pull the human-readable message out of an API error header, if any.
fn api_message(header: Option<&Value>) -> Option<String> {
    header?
        .get("message")?
        .get(0)?
        .get("value")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reverses_to_chronological_order() {
        let body = r#"[
            {"page": 1, "pages": 1, "per_page": 200, "total": 3},
            [
                {"indicator": {"id": "NY.GDP.MKTP.CD"}, "date": "2021", "value": 3.0},
                {"indicator": {"id": "NY.GDP.MKTP.CD"}, "date": "2020", "value": null},
                {"indicator": {"id": "NY.GDP.MKTP.CD"}, "date": "2019", "value": 1.0}
            ]
        ]"#;

        let points = parse_indicator_response(body).unwrap();
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], YearPoint::new("2019", Some(1.0)));
        assert_eq!(points[1], YearPoint::new("2020", None));
        assert_eq!(points[2], YearPoint::new("2021", Some(3.0)));
    }

    #[test]
    fn test_parse_empty_rows() {
        let body = r#"[{"page": 1, "total": 0}, []]"#;
        let points = parse_indicator_response(body).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_parse_error_payload() {
        let body = r#"[
            {"message": [{"id": "120", "key": "Invalid value", "value": "The provided parameter value is not valid"}]}
        ]"#;

        let err = parse_indicator_response(body).unwrap_err();
        match err {
            SourceError::Api(message) => {
                assert_eq!(message, "The provided parameter value is not valid")
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_null_rows_without_message() {
        let body = r#"[{"page": 1, "total": 0}, null]"#;
        let err = parse_indicator_response(body).unwrap_err();
        assert!(matches!(err, SourceError::Api(_)));
    }

    #[test]
    fn test_parse_garbage_is_json_error() {
        let err = parse_indicator_response("not json").unwrap_err();
        assert!(matches!(err, SourceError::Json(_)));
    }
}
