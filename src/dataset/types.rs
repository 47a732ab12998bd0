//! Core data types for the HappyData dataset layer
//!
//! This module defines the structures flowing between the sources and the
//! views:
//! - `YearPoint`: one observation of an indicator series
//! - `AlignedSeries`: an indicator series and a happiness series on a shared
//!   year axis
//! - `GeoFeature` / `GeoScoreRow`: topology features and their choropleth
//!   values

use serde::{Deserialize, Serialize};

/// A single observation of an indicator series.
///
/// Years are kept as strings because they are chart labels and lookup keys,
/// not arithmetic values. A `None` value is a reported gap in the source
/// data and must survive as a gap all the way to the rendering surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearPoint {
    /// Calendar year, e.g. "2020"
    pub year: String,
    /// Observed value, `None` where the source reports no data
    pub value: Option<f64>,
}

impl YearPoint {
    pub fn new(year: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            year: year.into(),
            value,
        }
    }
}

/// An indicator series and a happiness series aligned on one year axis.
///
/// All three sequences always have the same length; index `i` refers to the
/// same year in each. Gaps are `None`, never zero and never dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignedSeries {
    /// Year labels, taken verbatim from the indicator series
    pub labels: Vec<String>,
    /// Indicator values, one per label
    pub indicator: Vec<Option<f64>>,
    /// Happiness ladder scores, one per label
    pub happiness: Vec<Option<f64>>,
}

impl AlignedSeries {
    /// Number of years on the shared axis.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A named polygon feature from the world topology.
///
/// Only the display name is consumed here; geometry stays with the
/// rendering surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoFeature {
    pub name: String,
}

impl GeoFeature {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One choropleth row: a feature name and its score for the selected year.
///
/// Rebuilt from scratch on every recompute, never mutated in place. A `None`
/// value is the expected steady state for territories absent from the
/// survey.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoScoreRow {
    pub name: String,
    pub value: Option<f64>,
}
