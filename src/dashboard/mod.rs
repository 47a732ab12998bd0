//! Dashboard views
//!
//! Three views mirror the dashboard's tabs, each owning its latest computed
//! chart data:
//! - [`CountryTrend`]: one indicator series for one country
//! - [`IndicatorVsHappiness`]: indicator and happiness scores on a shared
//!   year axis
//! - [`RegionalHappiness`]: choropleth rows for the latest survey year
//!
//! Fetching and applying are separate steps on the indicator-backed views.
//! Every fetch is tagged with the selection active when it was issued; a
//! response whose tag no longer matches the current selection is discarded
//! as [`ApplyOutcome::Stale`]. In-flight requests are never cancelled, they
//! are just ignored on arrival if superseded.

mod compare;
mod regional;
mod trend;

pub use compare::{CompareResponse, ComparisonChart, IndicatorVsHappiness};
pub use regional::{compose_map, RegionalHappiness, RegionalMap};
pub use trend::{CountryTrend, TrendResponse, TrendSeries};

use thiserror::Error;

use crate::sources::SourceError;

/// Errors surfaced by the dashboard views
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A data source failed; not retried, shown as a failed view
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// The survey yielded no usable rows, so no latest year exists
    #[error("No survey data available")]
    NoSurveyData,
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Outcome of applying a fetched response to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The response matched the current selection and replaced the chart
    Applied,
    /// The response was issued for a superseded selection and was discarded
    Stale,
}

/// Selection parameters for the indicator-backed views.
///
/// Doubles as the request tag for the stale-response guard: a clone taken
/// at fetch time identifies which selection a response belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// World Bank country code, e.g. "IND"
    pub country_code: String,
    /// Survey-side country name, e.g. "India"
    pub country_name: String,
    /// World Bank indicator code, e.g. "NY.GDP.MKTP.CD"
    pub indicator: String,
}

impl Selection {
    pub fn new(
        country_code: impl Into<String>,
        country_name: impl Into<String>,
        indicator: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            country_name: country_name.into(),
            indicator: indicator.into(),
        }
    }
}

/// Built-in country catalog: (World Bank code, survey-side name).
pub const COUNTRIES: &[(&str, &str)] = &[
    ("IND", "India"),
    ("USA", "United States"),
    ("CHN", "China"),
    ("FIN", "Finland"),
    ("BRA", "Brazil"),
    ("ZAF", "South Africa"),
];

/// Built-in indicator catalog: (code, label).
pub const INDICATORS: &[(&str, &str)] = &[
    ("NY.GDP.MKTP.CD", "GDP (current US$)"),
    ("SP.POP.TOTL", "Population"),
    ("SE.ADT.LITR.ZS", "Literacy Rate (%)"),
    ("NY.GNP.PCAP.CD", "GNI per capita (US$)"),
];

/// Survey-side name for a catalog country code.
pub fn country_name(code: &str) -> Option<&'static str> {
    COUNTRIES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
}
