//! # HappyData
//!
//! A headless data engine for the HappyData dashboard: World Bank
//! indicators and World Happiness Report scores, reconciled and reshaped
//! into chart-ready structures.
//!
//! ## Features
//!
//! - **Trend series**: one indicator for one country, oldest to newest
//! - **Comparison series**: indicator and happiness scores aligned on a
//!   shared year axis, with survey/geography naming reconciled through a
//!   static alias table
//! - **Choropleth rows**: per-country happiness for the latest survey
//!   year, projected onto a TopoJSON topology's named features
//! - **Stale-response guard**: fetches are tagged with their selection;
//!   late responses for a superseded selection are discarded
//!
//! ## Modules
//!
//! - [`dataset`]: pure transforms over already-fetched data
//! - [`sources`]: World Bank API, survey CSV, and topology clients
//! - [`dashboard`]: the three views and their fetch/apply lifecycle
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use happydata::dashboard::{CountryTrend, Selection};
//! use happydata::sources::WorldBankClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WorldBankClient::new(reqwest::Client::new(), "https://api.worldbank.org/v2");
//!     let selection = Selection::new("IND", "India", "NY.GDP.MKTP.CD");
//!
//!     let mut view = CountryTrend::new(client, selection);
//!     view.refresh().await?;
//!
//!     if let Some(chart) = view.chart() {
//!         println!("{}: {} years", chart.label, chart.labels.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod sources;

// Re-export top-level types for convenience
pub use dataset::{
    align, apply_aliases, latest_year, project, scores_for_year, AlignedSeries, GeoFeature,
    GeoScoreRow, HappinessIndex, YearPoint, COUNTRY_ALIASES,
};

pub use sources::{SourceError, SourceResult, WorldBankClient};

pub use dashboard::{
    ApplyOutcome, ComparisonChart, CountryTrend, DashboardError, DashboardResult,
    IndicatorVsHappiness, RegionalHappiness, RegionalMap, Selection, TrendSeries,
};

pub use config::{Config, ConfigError, LoggingConfig, SourcesConfig};
