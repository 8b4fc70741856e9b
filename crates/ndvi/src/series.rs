//! Merging yearly payloads into one date-ordered series.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::error::NdviError;
use crate::payload::YearlyPayload;
use crate::sample::NdviSample;

/// A merged, date-ordered NDVI series.
///
/// Samples are sorted ascending by date. Samples sharing a date are all
/// kept, in the order their payloads were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NdviSeries {
    samples: Vec<NdviSample>,
    skipped: Vec<(String, NdviError)>,
}

impl NdviSeries {
    /// Builds a series from samples, sorting them by date.
    pub fn from_samples(mut samples: Vec<NdviSample>) -> Self {
        samples.sort_by_key(NdviSample::date);
        Self {
            samples,
            skipped: Vec::new(),
        }
    }

    /// The merged samples.
    pub fn samples(&self) -> &[NdviSample] {
        &self.samples
    }

    /// Consumes the series and returns its samples.
    pub fn into_samples(self) -> Vec<NdviSample> {
        self.samples
    }

    /// Years that could not be parsed, with the reason.
    pub fn skipped(&self) -> &[(String, NdviError)] {
        &self.skipped
    }

    /// Sample dates in series order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.samples.iter().map(NdviSample::date).collect()
    }

    /// Sample values in series order, `None` where missing.
    pub fn values(&self) -> Vec<Option<f64>> {
        self.samples.iter().map(NdviSample::value).collect()
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no sample survived parsing.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Parses every yearly payload and merges the samples by date.
///
/// A year whose payload is missing or malformed is skipped entirely and
/// recorded in [`NdviSeries::skipped`]; the remaining years are still
/// merged. The result is empty when no year parses.
#[tracing::instrument(level = "debug", skip_all, fields(n_years = payloads.len()))]
pub fn build_ndvi_series(payloads: &[YearlyPayload]) -> NdviSeries {
    let mut samples = Vec::new();
    let mut skipped = Vec::new();

    for payload in payloads {
        match payload.parse() {
            Ok(year_samples) => {
                debug!(year = payload.year(), n = year_samples.len(), "parsed payload");
                samples.extend(year_samples);
            }
            Err(e) => {
                warn!(year = payload.year(), error = %e, "skipping NDVI year");
                skipped.push((payload.year().to_string(), e));
            }
        }
    }

    let mut series = NdviSeries::from_samples(samples);
    series.skipped = skipped;
    series
}
