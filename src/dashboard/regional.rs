//! Regional happiness map view
//!
//! Loads the survey and the world topology concurrently and joins them
//! explicitly: the projection only runs once both fetches have completed.
//! The composed map is rebuilt from scratch on every load; nothing is
//! patched in place.

use std::collections::HashMap;

use serde::Serialize;

use super::{DashboardError, DashboardResult};
use crate::dataset::{
    apply_aliases, latest_year, project, scores_for_year, GeoFeature, GeoScoreRow, COUNTRY_ALIASES,
};
use crate::sources::{load_features, load_survey};

/// Choropleth dataset for the latest survey year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalMap {
    /// The survey year on display
    pub year: i32,
    /// One row per topology feature, in feature order
    pub rows: Vec<GeoScoreRow>,
}

/// The "Regional Happiness Distribution" tab.
pub struct RegionalHappiness {
    http: reqwest::Client,
    survey_location: String,
    topology_location: String,
    topology_object: String,
    map: Option<RegionalMap>,
}

impl RegionalHappiness {
    pub fn new(
        http: reqwest::Client,
        survey_location: impl Into<String>,
        topology_location: impl Into<String>,
        topology_object: impl Into<String>,
    ) -> Self {
        Self {
            http,
            survey_location: survey_location.into(),
            topology_location: topology_location.into(),
            topology_object: topology_object.into(),
            map: None,
        }
    }

    /// Fetch both sources concurrently and rebuild the map.
    ///
    /// Either fetch failing fails the load; a survey with no usable years
    /// is [`DashboardError::NoSurveyData`].
    pub async fn load(&mut self) -> DashboardResult<()> {
        let (rows, features) = tokio::try_join!(
            load_survey(&self.http, &self.survey_location),
            load_features(&self.http, &self.topology_location, &self.topology_object),
        )?;

        let map = compose_map(&rows, &features)?;
        tracing::info!(
            year = map.year,
            features = map.rows.len(),
            shaded = map.rows.iter().filter(|row| row.value.is_some()).count(),
            "regional map rebuilt"
        );
        self.map = Some(map);
        Ok(())
    }

    /// The current map, if a load has succeeded.
    pub fn map(&self) -> Option<&RegionalMap> {
        self.map.as_ref()
    }

    /// Hand the map to the rendering surface.
    pub fn take_map(&mut self) -> Option<RegionalMap> {
        self.map.take()
    }
}

/// Pure composition step: select the latest year, build the reconciled
/// score map, and project it onto the features.
pub fn compose_map(
    rows: &[HashMap<String, String>],
    features: &[GeoFeature],
) -> DashboardResult<RegionalMap> {
    let year = latest_year(rows).ok_or(DashboardError::NoSurveyData)?;

    let mut scores = scores_for_year(rows, year);
    apply_aliases(&mut scores, COUNTRY_ALIASES);

    Ok(RegionalMap {
        year,
        rows: project(&scores, features),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{COUNTRY_COLUMN, SCORE_COLUMN, YEAR_COLUMN};

    fn row(country: &str, year: &str, score: &str) -> HashMap<String, String> {
        HashMap::from([
            (COUNTRY_COLUMN.to_string(), country.to_string()),
            (YEAR_COLUMN.to_string(), year.to_string()),
            (SCORE_COLUMN.to_string(), score.to_string()),
        ])
    }

    #[test]
    fn test_compose_selects_latest_year() {
        let rows = vec![
            row("Finland", "2020", "7.8"),
            row("Finland", "2021", "7.9"),
            row("India", "2020", "4.2"),
        ];
        let features = vec![GeoFeature::new("Finland"), GeoFeature::new("India")];

        let map = compose_map(&rows, &features).unwrap();
        assert_eq!(map.year, 2021);
        assert_eq!(map.rows.len(), 2);
        assert_eq!(map.rows[0].value, Some(7.9));
        // India has no 2021 row, so it renders unshaded.
        assert_eq!(map.rows[1].value, None);
    }

    #[test]
    fn test_compose_applies_aliases() {
        let rows = vec![row("United States", "2021", "6.9")];
        let features = vec![GeoFeature::new("United States of America")];

        let map = compose_map(&rows, &features).unwrap();
        assert_eq!(map.rows[0].value, Some(6.9));
    }

    #[test]
    fn test_compose_empty_survey_is_no_data() {
        let features = vec![GeoFeature::new("Finland")];
        let err = compose_map(&[], &features).unwrap_err();
        assert!(matches!(err, DashboardError::NoSurveyData));
    }

    #[test]
    fn test_compose_preserves_feature_count() {
        let rows = vec![row("Finland", "2021", "7.9")];
        let features = vec![
            GeoFeature::new("Greenland"),
            GeoFeature::new("Finland"),
            GeoFeature::new("Antarctica"),
        ];

        let map = compose_map(&rows, &features).unwrap();
        assert_eq!(map.rows.len(), 3);
    }

    #[tokio::test]
    async fn test_load_joins_local_sources() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let survey_path = dir.path().join("whr.csv");
        let topology_path = dir.path().join("countries.json");

        let mut survey = std::fs::File::create(&survey_path).unwrap();
        write!(
            survey,
            "Country name,Year,Ladder score\nFinland,2021,7.9\nIndia,2020,4.2\n"
        )
        .unwrap();

        let mut topology = std::fs::File::create(&topology_path).unwrap();
        write!(
            topology,
            r#"{{"type":"Topology","objects":{{"countries":{{"type":"GeometryCollection","geometries":[{{"type":"Polygon","properties":{{"name":"Finland"}},"arcs":[]}},{{"type":"Polygon","properties":{{"name":"India"}},"arcs":[]}}]}}}},"arcs":[]}}"#
        )
        .unwrap();

        let mut view = RegionalHappiness::new(
            reqwest::Client::new(),
            survey_path.to_str().unwrap(),
            topology_path.to_str().unwrap(),
            "countries",
        );
        view.load().await.unwrap();

        let map = view.map().unwrap();
        assert_eq!(map.year, 2021);
        assert_eq!(map.rows.len(), 2);
        assert_eq!(map.rows[0].value, Some(7.9));
        assert_eq!(map.rows[1].value, None);

        let owned = view.take_map().unwrap();
        assert_eq!(owned.year, 2021);
        assert!(view.map().is_none());
    }
}
