//! A single dated NDVI observation.

use chrono::NaiveDate;
use serde::Serialize;

/// One NDVI observation.
///
/// `value` is `None` for a missing observation. Negative and non-finite
/// readings are sentinels for "no usable observation" and are stored as
/// `None` on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NdviSample {
    date: NaiveDate,
    value: Option<f64>,
}

impl NdviSample {
    /// Creates a sample, mapping negative and non-finite values to `None`.
    pub fn new(date: NaiveDate, value: Option<f64>) -> Self {
        Self {
            date,
            value: value.filter(|v| is_observation(*v)),
        }
    }

    /// Observation date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Observed value, or `None` when missing.
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Returns `true` when the observation is missing.
    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}

/// Returns `true` for values that count as real observations.
pub(crate) fn is_observation(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
