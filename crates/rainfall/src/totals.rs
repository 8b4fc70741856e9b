//! Per-year seasonal rainfall totals.

use std::collections::BTreeMap;
use std::collections::btree_map;

use ecotrend_years::ShortYear;
use serde::Serialize;

use crate::attribute::AttributeValue;
use crate::record::rainfall_records;

/// Aggregated rainfall per short year.
///
/// A year is present only if at least one seasonal attribute contributed to
/// it. Iteration is in ascending year order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SeasonalTotals {
    totals: BTreeMap<ShortYear, f64>,
}

impl SeasonalTotals {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` into the running total for `year`.
    pub fn add(&mut self, year: ShortYear, value: f64) {
        *self.totals.entry(year).or_insert(0.0) += value;
    }

    /// Total for `year`, if any season contributed.
    pub fn get(&self, year: ShortYear) -> Option<f64> {
        self.totals.get(&year).copied()
    }

    /// Number of years present.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Returns `true` if no year is present.
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Iterates `(year, total)` in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (ShortYear, f64)> + '_ {
        self.totals.iter().map(|(&year, &total)| (year, total))
    }

    /// Iterates only the years whose total is finite and strictly positive.
    ///
    /// Zero is "no data" for rainfall, never a real dry year.
    pub fn with_rainfall(&self) -> impl Iterator<Item = (ShortYear, f64)> + '_ {
        self.iter()
            .filter(|&(_, total)| total.is_finite() && total > 0.0)
    }
}

impl FromIterator<(ShortYear, f64)> for SeasonalTotals {
    /// Sums repeated years rather than overwriting them.
    fn from_iter<T: IntoIterator<Item = (ShortYear, f64)>>(iter: T) -> Self {
        let mut totals = SeasonalTotals::new();
        for (year, value) in iter {
            totals.add(year, value);
        }
        totals
    }
}

impl IntoIterator for SeasonalTotals {
    type Item = (ShortYear, f64);
    type IntoIter = btree_map::IntoIter<ShortYear, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.totals.into_iter()
    }
}

/// Sums every seasonal precipitation attribute into per-year totals.
///
/// Attributes that are not `precipitation_<season>_<YYYY>-<YYYY>` are
/// ignored. Seasons of the same year are added together. Returns an empty
/// mapping when nothing matches.
#[tracing::instrument(level = "debug", skip_all)]
pub fn aggregate_seasonal_rainfall<'a, K, I>(attributes: I) -> SeasonalTotals
where
    K: AsRef<str> + 'a,
    I: IntoIterator<Item = (&'a K, &'a AttributeValue)>,
{
    let totals: SeasonalTotals = rainfall_records(attributes)
        .into_iter()
        .map(|record| (record.short_year(), record.value()))
        .collect();
    tracing::debug!(n_years = totals.len(), "aggregated seasonal rainfall");
    totals
}
