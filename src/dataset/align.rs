//! Year-axis alignment of an indicator series with happiness scores
//!
//! The indicator series is the time axis of record: its years become the
//! labels, verbatim and in order, and the happiness series is projected
//! onto that axis by per-year lookup.

use super::{AlignedSeries, HappinessIndex, YearPoint};

/// Align a chronological indicator series with a country's happiness scores.
///
/// Output sequences always have the same length as `indicator`. Years the
/// survey does not cover for `country` (or a country entirely absent from
/// the index) yield `None` - gaps are preserved, never interpolated,
/// forward-filled, or dropped. An empty indicator series produces three
/// empty sequences.
pub fn align(indicator: &[YearPoint], country: &str, index: &HappinessIndex) -> AlignedSeries {
    let mut labels = Vec::with_capacity(indicator.len());
    let mut indicator_values = Vec::with_capacity(indicator.len());
    let mut happiness = Vec::with_capacity(indicator.len());

    for point in indicator {
        labels.push(point.year.clone());
        indicator_values.push(point.value);
        happiness.push(index.score(country, &point.year));
    }

    AlignedSeries {
        labels,
        indicator: indicator_values,
        happiness,
    }
}
