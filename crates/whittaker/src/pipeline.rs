//! NDVI samples to a smoothed, gap-free curve.

use chrono::NaiveDate;
use ecotrend_ndvi::{NdviSample, YearlyPayload, build_ndvi_series, interpolate_gaps};
use serde::Serialize;
use tracing::info;

use crate::config::WhittakerConfig;
use crate::error::WhittakerError;
use crate::smoother::whittaker_smooth;

/// One point of a smoothed curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SmoothedPoint {
    date: NaiveDate,
    value: f64,
}

impl SmoothedPoint {
    /// Creates a point.
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }

    /// Date of the underlying sample.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Smoothed value.
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Fills gaps in `samples` and smooths the result.
///
/// Returns one point per input sample, in input order, with no missing
/// values. Samples are expected to be date-ordered, as produced by
/// [`build_ndvi_series`].
///
/// # Errors
///
/// Propagates [`whittaker_smooth`] errors; invalid configuration is the only
/// one reachable for interpolated input.
pub fn smooth_ndvi_series(
    samples: &[NdviSample],
    config: &WhittakerConfig,
) -> Result<Vec<SmoothedPoint>, WhittakerError> {
    let values: Vec<Option<f64>> = samples.iter().map(NdviSample::value).collect();
    let filled = interpolate_gaps(&values);
    let smoothed = whittaker_smooth(&filled, config)?;

    Ok(samples
        .iter()
        .zip(smoothed)
        .map(|(sample, value)| SmoothedPoint::new(sample.date(), value))
        .collect())
}

/// Parses, merges, gap-fills and smooths yearly NDVI payloads.
///
/// Years whose payload is missing or malformed are left out; see
/// [`build_ndvi_series`].
///
/// # Errors
///
/// Same as [`smooth_ndvi_series`].
#[tracing::instrument(level = "debug", skip_all, fields(n_years = payloads.len()))]
pub fn smooth_ndvi_payloads(
    payloads: &[YearlyPayload],
    config: &WhittakerConfig,
) -> Result<Vec<SmoothedPoint>, WhittakerError> {
    let series = build_ndvi_series(payloads);
    info!(
        n_samples = series.len(),
        n_skipped = series.skipped().len(),
        "merged NDVI series"
    );
    smooth_ndvi_series(series.samples(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn one_point_per_sample() {
        let samples = vec![
            NdviSample::new(date("2022-01-01"), Some(0.2)),
            NdviSample::new(date("2022-01-17"), None),
            NdviSample::new(date("2022-02-02"), Some(0.4)),
            NdviSample::new(date("2022-02-18"), Some(-1.0)),
        ];
        let points = smooth_ndvi_series(&samples, &WhittakerConfig::new()).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points[1].date(), date("2022-01-17"));
        assert!(points.iter().all(|p| p.value().is_finite()));
    }

    #[test]
    fn linear_after_fill_is_unchanged() {
        let samples = vec![
            NdviSample::new(date("2022-01-01"), Some(0.1)),
            NdviSample::new(date("2022-01-17"), None),
            NdviSample::new(date("2022-02-02"), Some(0.3)),
            NdviSample::new(date("2022-02-18"), Some(0.4)),
        ];
        let points = smooth_ndvi_series(&samples, &WhittakerConfig::new()).unwrap();
        for (p, want) in points.iter().zip([0.1, 0.2, 0.3, 0.4]) {
            assert_relative_eq!(p.value(), want, epsilon = 1e-10);
        }
    }

    #[test]
    fn empty_samples() {
        assert!(smooth_ndvi_series(&[], &WhittakerConfig::new()).unwrap().is_empty());
    }

    #[test]
    fn payloads_end_to_end() {
        let payloads = vec![
            YearlyPayload::new("2022", Some(r#"{"2022-01-01": 0.2, "2022-01-17": 0.6}"#)),
            YearlyPayload::new("2023", Some("oops")),
        ];
        let points = smooth_ndvi_payloads(&payloads, &WhittakerConfig::new()).unwrap();
        // Two points with d = 2 pass through unchanged.
        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].value(), 0.2);
        assert_relative_eq!(points[1].value(), 0.6);
    }

    #[test]
    fn point_serializes() {
        let p = SmoothedPoint::new(date("2022-01-01"), 0.5);
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"date":"2022-01-01","value":0.5}"#
        );
    }
}
