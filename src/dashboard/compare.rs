//! Indicator vs happiness comparison view
//!
//! Loads the survey once into a reconciled [`HappinessIndex`], then per
//! selection fetches the indicator series and aligns the two on the
//! indicator's year axis. Alignment against a not-yet-loaded survey is
//! well-defined: every happiness value is a gap.

use serde::Serialize;

use super::{ApplyOutcome, DashboardResult, Selection};
use crate::dataset::{align, AlignedSeries, HappinessIndex, YearPoint, COUNTRY_ALIASES};
use crate::sources::{load_survey, WorldBankClient};

/// Chart-ready dual-axis comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonChart {
    /// Survey-side country name
    pub country: String,
    /// World Bank indicator code
    pub indicator: String,
    /// The two series on a shared year axis
    pub series: AlignedSeries,
}

/// A fetched indicator series tagged with the selection it was issued for.
#[derive(Debug)]
pub struct CompareResponse {
    tag: Selection,
    points: Vec<YearPoint>,
}

impl CompareResponse {
    /// The selection active when this fetch was issued.
    pub fn tag(&self) -> &Selection {
        &self.tag
    }
}

/// The "Indicator vs Happiness" tab.
pub struct IndicatorVsHappiness {
    worldbank: WorldBankClient,
    http: reqwest::Client,
    survey_location: String,
    index: HappinessIndex,
    selection: Selection,
    chart: Option<ComparisonChart>,
}

impl IndicatorVsHappiness {
    pub fn new(
        worldbank: WorldBankClient,
        http: reqwest::Client,
        survey_location: impl Into<String>,
        selection: Selection,
    ) -> Self {
        Self {
            worldbank,
            http,
            survey_location: survey_location.into(),
            index: HappinessIndex::default(),
            selection,
            chart: None,
        }
    }

    /// Load the survey and rebuild the reconciled index from scratch.
    ///
    /// Called once up front; call again to pick up a changed source file.
    /// The previous chart is dropped since it was aligned against the old
    /// index.
    pub async fn load_survey(&mut self) -> DashboardResult<()> {
        let rows = load_survey(&self.http, &self.survey_location).await?;
        let mut index = HappinessIndex::from_rows(&rows);
        index.reconcile(COUNTRY_ALIASES);

        if index.is_empty() {
            tracing::warn!(
                location = %self.survey_location,
                "survey produced an empty happiness index"
            );
        }

        self.index = index;
        self.chart = None;
        Ok(())
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Change the selection, dropping the chart it no longer matches.
    pub fn select(&mut self, selection: Selection) {
        if selection != self.selection {
            self.selection = selection;
            self.chart = None;
        }
    }

    /// Issue an indicator fetch for the current selection.
    pub async fn fetch(&self) -> DashboardResult<CompareResponse> {
        let tag = self.selection.clone();
        let points = self
            .worldbank
            .indicator(&tag.country_code, &tag.indicator)
            .await?;
        Ok(CompareResponse { tag, points })
    }

    /// Align a fetched response against the index and replace the chart.
    ///
    /// A late response for a superseded selection is discarded.
    pub fn apply(&mut self, response: CompareResponse) -> ApplyOutcome {
        if response.tag != self.selection {
            tracing::debug!("discarding stale comparison response");
            return ApplyOutcome::Stale;
        }

        let series = align(&response.points, &response.tag.country_name, &self.index);
        self.chart = Some(ComparisonChart {
            country: response.tag.country_name,
            indicator: response.tag.indicator,
            series,
        });
        ApplyOutcome::Applied
    }

    /// Fetch and apply in one step.
    pub async fn refresh(&mut self) -> DashboardResult<ApplyOutcome> {
        let response = self.fetch().await?;
        Ok(self.apply(response))
    }

    /// The current chart, if one has been computed for this selection.
    pub fn chart(&self) -> Option<&ComparisonChart> {
        self.chart.as_ref()
    }

    /// Hand the chart to the rendering surface.
    pub fn take_chart(&mut self) -> Option<ComparisonChart> {
        self.chart.take()
    }

    /// The reconciled index, mainly for diagnostics.
    pub fn index(&self) -> &HappinessIndex {
        &self.index
    }
}
