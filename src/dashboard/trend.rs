//! Country indicator trend view
//!
//! The simplest view: one indicator series for one country, charted as-is.

use serde::Serialize;

use super::{ApplyOutcome, DashboardResult, Selection};
use crate::dataset::YearPoint;
use crate::sources::WorldBankClient;

/// Chart-ready single indicator series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    /// Legend label, e.g. "IND - NY.GDP.MKTP.CD"
    pub label: String,
    /// Year labels, oldest first
    pub labels: Vec<String>,
    /// Indicator values, `None` where the source reports a gap
    pub values: Vec<Option<f64>>,
}

/// A fetched indicator series tagged with the selection it was issued for.
#[derive(Debug)]
pub struct TrendResponse {
    tag: Selection,
    points: Vec<YearPoint>,
}

impl TrendResponse {
    /// The selection active when this fetch was issued.
    pub fn tag(&self) -> &Selection {
        &self.tag
    }
}

/// The "Country Indicator Trends" tab.
pub struct CountryTrend {
    client: WorldBankClient,
    selection: Selection,
    chart: Option<TrendSeries>,
}

impl CountryTrend {
    pub fn new(client: WorldBankClient, selection: Selection) -> Self {
        Self {
            client,
            selection,
            chart: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Change the selection. The previous chart no longer reflects it and
    /// is dropped; any in-flight fetch for it will be discarded on apply.
    pub fn select(&mut self, selection: Selection) {
        if selection != self.selection {
            self.selection = selection;
            self.chart = None;
        }
    }

    /// Issue a fetch for the current selection.
    ///
    /// Takes `&self` so a caller may change the selection while the request
    /// is in flight; the response carries its own tag for the guard in
    /// [`apply`](Self::apply).
    pub async fn fetch(&self) -> DashboardResult<TrendResponse> {
        let tag = self.selection.clone();
        let points = self
            .client
            .indicator(&tag.country_code, &tag.indicator)
            .await?;
        Ok(TrendResponse { tag, points })
    }

    /// Apply a fetched response, replacing the owned chart.
    ///
    /// A late response for a superseded selection is discarded.
    pub fn apply(&mut self, response: TrendResponse) -> ApplyOutcome {
        if response.tag != self.selection {
            tracing::debug!(
                stale_country = %response.tag.country_code,
                current_country = %self.selection.country_code,
                "discarding stale trend response"
            );
            return ApplyOutcome::Stale;
        }

        let label = format!("{} - {}", response.tag.country_code, response.tag.indicator);
        let (labels, values) = response
            .points
            .into_iter()
            .map(|point| (point.year, point.value))
            .unzip();

        self.chart = Some(TrendSeries {
            label,
            labels,
            values,
        });
        ApplyOutcome::Applied
    }

    /// Fetch and apply in one step.
    pub async fn refresh(&mut self) -> DashboardResult<ApplyOutcome> {
        let response = self.fetch().await?;
        Ok(self.apply(response))
    }

    /// The current chart, if one has been computed for this selection.
    pub fn chart(&self) -> Option<&TrendSeries> {
        self.chart.as_ref()
    }

    /// Hand the chart to the rendering surface, leaving the view empty
    /// until the next apply.
    pub fn take_chart(&mut self) -> Option<TrendSeries> {
        self.chart.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> CountryTrend {
        let client = WorldBankClient::new(reqwest::Client::new(), "http://localhost:0");
        CountryTrend::new(client, Selection::new("IND", "India", "NY.GDP.MKTP.CD"))
    }

    fn response(tag: Selection, points: Vec<YearPoint>) -> TrendResponse {
        TrendResponse { tag, points }
    }

    #[test]
    fn test_apply_matching_tag() {
        let mut view = view();
        let tag = view.selection().clone();
        let points = vec![
            YearPoint::new("2019", Some(1.0)),
            YearPoint::new("2020", None),
        ];

        assert_eq!(view.apply(response(tag, points)), ApplyOutcome::Applied);
        let chart = view.chart().unwrap();
        assert_eq!(chart.label, "IND - NY.GDP.MKTP.CD");
        assert_eq!(chart.labels, vec!["2019", "2020"]);
        assert_eq!(chart.values, vec![Some(1.0), None]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut view = view();
        let old_tag = view.selection().clone();

        // Selection changes while the request is in flight.
        view.select(Selection::new("USA", "United States", "NY.GDP.MKTP.CD"));

        let outcome = view.apply(response(old_tag, vec![YearPoint::new("2020", Some(1.0))]));
        assert_eq!(outcome, ApplyOutcome::Stale);
        assert!(view.chart().is_none());
    }

    #[test]
    fn test_select_drops_previous_chart() {
        let mut view = view();
        let tag = view.selection().clone();
        view.apply(response(tag, vec![YearPoint::new("2020", Some(1.0))]));
        assert!(view.chart().is_some());

        view.select(Selection::new("CHN", "China", "SP.POP.TOTL"));
        assert!(view.chart().is_none());
    }

    #[test]
    fn test_reselecting_same_selection_keeps_chart() {
        let mut view = view();
        let tag = view.selection().clone();
        view.apply(response(tag.clone(), vec![YearPoint::new("2020", Some(1.0))]));

        view.select(tag);
        assert!(view.chart().is_some());
    }

    #[test]
    fn test_take_chart_transfers_ownership() {
        let mut view = view();
        let tag = view.selection().clone();
        view.apply(response(tag, vec![]));

        let chart = view.take_chart().unwrap();
        assert!(chart.labels.is_empty());
        assert!(view.chart().is_none());
    }
}
