//! Dataset model and pure transforms
//!
//! Everything in this module operates on already-fetched data; there is no
//! I/O, no retry logic, and no shared mutable state. The only failure mode
//! is bad input shape, handled by skip-and-continue policies:
//!
//! - [`HappinessIndex`]: survey rows indexed by country and year
//! - [`align`]: join an indicator series and happiness scores on one year
//!   axis
//! - [`latest_year`] / [`scores_for_year`] / [`project`]: choropleth
//!   pipeline for the most recent survey year

mod align;
mod choropleth;
mod index;
mod types;

pub use align::align;
pub use choropleth::{latest_year, project, scores_for_year};
pub use index::{
    apply_aliases, HappinessIndex, YearScores, COUNTRY_ALIASES, COUNTRY_COLUMN, SCORE_COLUMN,
    YEAR_COLUMN,
};
pub use types::{AlignedSeries, GeoFeature, GeoScoreRow, YearPoint};
