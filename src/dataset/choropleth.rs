//! Latest-year selection and projection of scores onto geography
//!
//! The regional map shows one survey year: the most recent one present in
//! the data. Scores for that year are projected onto the topology's named
//! features by exact string match, after alias reconciliation.

use std::collections::HashMap;

use super::{GeoFeature, GeoScoreRow, COUNTRY_COLUMN, SCORE_COLUMN, YEAR_COLUMN};

/// The most recent integer year among the survey rows.
///
/// Returns `None` when no row carries a parseable year, which callers
/// surface as "no data available" rather than a crash. Rows with
/// unparseable years simply do not participate in the maximum.
pub fn latest_year(rows: &[HashMap<String, String>]) -> Option<i32> {
    rows.iter()
        .filter_map(|row| row.get(YEAR_COLUMN))
        .filter_map(|year| year.trim().parse::<i32>().ok())
        .max()
}

/// Country -> ladder score for exactly the rows of the given year.
///
/// Duplicate countries within the year are not expected (one score per
/// country per year) but resolve last-seen-wins, matching the index
/// builder's duplicate policy. Rows with unparseable scores are skipped.
pub fn scores_for_year(rows: &[HashMap<String, String>], year: i32) -> HashMap<String, f64> {
    let mut scores = HashMap::new();

    for row in rows {
        let row_year = row
            .get(YEAR_COLUMN)
            .and_then(|y| y.trim().parse::<i32>().ok());
        if row_year != Some(year) {
            continue;
        }

        let country = row
            .get(COUNTRY_COLUMN)
            .map(|c| c.trim())
            .filter(|c| !c.is_empty());
        let score = row
            .get(SCORE_COLUMN)
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|s| s.is_finite());

        if let (Some(country), Some(score)) = (country, score) {
            scores.insert(country.to_string(), score);
        }
    }

    scores
}

/// One `GeoScoreRow` per feature, preserving feature order.
///
/// Lookup is by exact string match on the feature's display name. A miss
/// yields `None` - the expected steady state for dependent territories and
/// micro-states absent from the survey. Output length always equals the
/// feature count.
pub fn project(scores: &HashMap<String, f64>, features: &[GeoFeature]) -> Vec<GeoScoreRow> {
    features
        .iter()
        .map(|feature| GeoScoreRow {
            name: feature.name.clone(),
            value: scores.get(&feature.name).copied(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, year: &str, score: &str) -> HashMap<String, String> {
        HashMap::from([
            (COUNTRY_COLUMN.to_string(), country.to_string()),
            (YEAR_COLUMN.to_string(), year.to_string()),
            (SCORE_COLUMN.to_string(), score.to_string()),
        ])
    }

    #[test]
    fn test_latest_year_picks_maximum() {
        let rows = vec![
            row("Finland", "2019", "7.8"),
            row("Finland", "2021", "7.9"),
            row("Finland", "2020", "7.8"),
        ];
        assert_eq!(latest_year(&rows), Some(2021));
    }

    #[test]
    fn test_latest_year_empty_is_none() {
        assert_eq!(latest_year(&[]), None);
    }

    #[test]
    fn test_latest_year_ignores_unparseable() {
        let rows = vec![row("Finland", "unknown", "7.8"), row("India", "2019", "4.0")];
        assert_eq!(latest_year(&rows), Some(2019));
    }

    #[test]
    fn test_scores_filter_to_selected_year() {
        let rows = vec![
            row("Finland", "2020", "7.8"),
            row("Finland", "2021", "7.9"),
            row("India", "2021", "4.0"),
            row("India", "2021", "bad"),
        ];
        let scores = scores_for_year(&rows, 2021);

        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get("Finland"), Some(&7.9));
        assert_eq!(scores.get("India"), Some(&4.0));
    }

    #[test]
    fn test_scores_duplicate_last_wins() {
        let rows = vec![row("Finland", "2021", "7.8"), row("Finland", "2021", "7.9")];
        let scores = scores_for_year(&rows, 2021);
        assert_eq!(scores.get("Finland"), Some(&7.9));
    }

    #[test]
    fn test_projection_preserves_order_and_length() {
        let features = vec![
            GeoFeature::new("Greenland"),
            GeoFeature::new("Finland"),
            GeoFeature::new("Antarctica"),
        ];
        let scores = HashMap::from([("Finland".to_string(), 7.9)]);

        let projected = project(&scores, &features);
        assert_eq!(projected.len(), features.len());
        assert_eq!(projected[0].name, "Greenland");
        assert_eq!(projected[0].value, None);
        assert_eq!(projected[1].name, "Finland");
        assert_eq!(projected[1].value, Some(7.9));
        assert_eq!(projected[2].name, "Antarctica");
        assert_eq!(projected[2].value, None);
    }

    #[test]
    fn test_projection_of_empty_features() {
        let scores = HashMap::from([("Finland".to_string(), 7.9)]);
        assert!(project(&scores, &[]).is_empty());
    }
}
