//! World Happiness Report CSV loader
//!
//! The survey arrives as plain text with at least the columns
//! "Country name", "Year" and "Ladder score". It is parsed into
//! column-name -> value rows; interpreting those rows (score parsing,
//! duplicate handling) is the dataset layer's job.

use std::collections::HashMap;

use super::{load_text, SourceResult};

/// Load survey rows from a local path or HTTP URL.
pub async fn load_survey(
    client: &reqwest::Client,
    location: &str,
) -> SourceResult<Vec<HashMap<String, String>>> {
    let text = load_text(client, location).await?;
    let rows = parse_survey(&text);
    tracing::info!(location, rows = rows.len(), "survey loaded");
    Ok(rows)
}

/// Parse survey CSV text into column-name -> value rows.
///
/// Headers and fields are trimmed. Records that fail to parse are skipped
/// and counted, never fatal; a header that cannot be read yields zero rows.
pub fn parse_survey(text: &str) -> Vec<HashMap<String, String>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(str::to_string).collect(),
        Err(e) => {
            tracing::warn!("unreadable survey header: {e}");
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        match record {
            Ok(record) => {
                let row: HashMap<String, String> = headers
                    .iter()
                    .cloned()
                    .zip(record.iter().map(str::to_string))
                    .collect();
                rows.push(row);
            }
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "skipped malformed survey records");
    }

    rows
}
