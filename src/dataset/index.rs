//! Happiness index construction and country-name reconciliation
//!
//! The World Happiness Report and the geography/indicator datasets do not
//! agree on country naming ("United States" vs "United States of America").
//! A static, hand-maintained alias table bridges the two conventions; it is
//! applied forward only, from the survey-side name to the other datasets'
//! name.

use std::collections::HashMap;
use std::sync::Arc;

/// Survey column carrying the country name.
pub const COUNTRY_COLUMN: &str = "Country name";
/// Survey column carrying the calendar year.
pub const YEAR_COLUMN: &str = "Year";
/// Survey column carrying the ladder score.
pub const SCORE_COLUMN: &str = "Ladder score";

/// Per-country year -> ladder score mapping.
pub type YearScores = HashMap<String, f64>;

/// Survey-side country name -> geography/indicator-side name.
///
/// Invariants: every name is non-empty and no source name appears twice
/// (enforced by tests). Reverse lookups are intentionally not supported;
/// countries listed in the geography only under an alias source name stay
/// unshaded.
pub const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("United States", "United States of America"),
    ("Russia", "Russian Federation"),
    ("South Korea", "Korea, Rep."),
    ("North Korea", "Korea, Dem. People’s Rep."),
    ("Venezuela", "Venezuela, RB"),
    ("Iran", "Iran, Islamic Rep."),
    ("Egypt", "Egypt, Arab Rep."),
    ("Syria", "Syrian Arab Republic"),
    ("Czechia", "Czech Republic"),
    ("Slovakia", "Slovak Republic"),
    ("Gambia", "Gambia, The"),
    ("Bahamas", "Bahamas, The"),
    ("Yemen", "Yemen, Rep."),
    ("Hong Kong S.A.R.", "Hong Kong SAR, China"),
    ("Macau S.A.R.", "Macao SAR, China"),
    ("Ivory Coast", "Cote d'Ivoire"),
    ("Tanzania", "Tanzania, United Rep."),
    ("Bolivia", "Bolivia, Plurinational State of"),
    ("Moldova", "Moldova, Rep."),
];

/// Copy each aliased entry in `map` to its target name.
///
/// Forward only (source -> target) and idempotent: an absent source name is
/// silently skipped, and re-applying the table changes nothing. Values are
/// cloned, which for `Arc`-backed maps shares the underlying data rather
/// than duplicating it.
pub fn apply_aliases<V: Clone>(map: &mut HashMap<String, V>, aliases: &[(&str, &str)]) {
    for (source, target) in aliases {
        if let Some(value) = map.get(*source).cloned() {
            map.insert((*target).to_string(), value);
        }
    }
}

/// Lookup table from country name to per-year ladder scores.
///
/// Built once from raw survey rows and never mutated afterwards; when the
/// source data changes the index is rebuilt from scratch. Per-country maps
/// are shared via `Arc` so reconciliation can add a second name for the
/// same scores without copying them.
#[derive(Debug, Clone, Default)]
pub struct HappinessIndex {
    countries: HashMap<String, Arc<YearScores>>,
}

impl HappinessIndex {
    /// Build an index from unordered survey rows.
    ///
    /// Rows missing a country name or year, or whose score does not parse
    /// as a finite number, are skipped. On duplicate (country, year) pairs
    /// the last row in input order wins. Zero usable rows yield an empty
    /// index, never an error.
    pub fn from_rows(rows: &[HashMap<String, String>]) -> Self {
        let mut building: HashMap<String, YearScores> = HashMap::new();
        let mut skipped = 0usize;

        for row in rows {
            let country = row
                .get(COUNTRY_COLUMN)
                .map(|c| c.trim())
                .filter(|c| !c.is_empty());
            let year = row
                .get(YEAR_COLUMN)
                .map(|y| y.trim())
                .filter(|y| !y.is_empty());
            let score = row
                .get(SCORE_COLUMN)
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|s| s.is_finite());

            let (Some(country), Some(year), Some(score)) = (country, year, score) else {
                skipped += 1;
                continue;
            };

            building
                .entry(country.to_string())
                .or_default()
                .insert(year.to_string(), score);
        }

        if skipped > 0 {
            tracing::debug!(skipped, "skipped unusable survey rows while indexing");
        }

        Self {
            countries: building
                .into_iter()
                .map(|(country, scores)| (country, Arc::new(scores)))
                .collect(),
        }
    }

    /// Apply the alias table so lookups under either naming convention hit
    /// the same scores. Idempotent; see [`apply_aliases`].
    pub fn reconcile(&mut self, aliases: &[(&str, &str)]) {
        apply_aliases(&mut self.countries, aliases);
    }

    /// Ladder score for a country and year, `None` on any miss.
    pub fn score(&self, country: &str, year: &str) -> Option<f64> {
        self.countries.get(country)?.get(year).copied()
    }

    /// Whether the country appears in the index under this exact name.
    pub fn contains(&self, country: &str) -> bool {
        self.countries.contains_key(country)
    }

    /// All years recorded for a country.
    pub fn years(&self, country: &str) -> Option<&YearScores> {
        self.countries.get(country).map(Arc::as_ref)
    }

    /// Number of country entries (aliases included once applied).
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
