//! Per-year NDVI payloads and their parsing.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::NdviError;
use crate::sample::NdviSample;

/// The serialized NDVI samples of one year, as fetched from the data service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyPayload {
    year: String,
    body: Option<String>,
}

impl YearlyPayload {
    /// Creates a payload; `body` is `None` when the year was not delivered.
    pub fn new(year: impl Into<String>, body: Option<impl Into<String>>) -> Self {
        Self {
            year: year.into(),
            body: body.map(Into::into),
        }
    }

    /// Year label the payload was requested for.
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Raw serialized body, if delivered.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Parses the body into samples.
    ///
    /// # Errors
    ///
    /// [`NdviError::MissingPayload`] when there is no body, otherwise the
    /// errors of [`parse_payload`].
    pub fn parse(&self) -> Result<Vec<NdviSample>, NdviError> {
        let body = self.body().ok_or_else(|| NdviError::MissingPayload {
            year: self.year.clone(),
        })?;
        parse_payload(body)
    }
}

/// Parses a serialized `{ "<date>": <number|null>, ... }` object.
///
/// Samples are returned in key order. Negative values become missing
/// samples.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`NdviError::MalformedPayload`] | not a JSON object of numbers/nulls |
/// | [`NdviError::InvalidDate`] | any key that is not a date |
pub fn parse_payload(body: &str) -> Result<Vec<NdviSample>, NdviError> {
    let raw: BTreeMap<String, Option<f64>> =
        serde_json::from_str(body).map_err(|e| NdviError::MalformedPayload {
            reason: e.to_string(),
        })?;

    raw.into_iter()
        .map(|(key, value)| Ok(NdviSample::new(parse_date(&key)?, value)))
        .collect()
}

/// Parses a payload date key.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DDTHH:MM:SS`;
/// the time of day is dropped.
///
/// # Errors
///
/// Returns [`NdviError::InvalidDate`] for anything else.
pub fn parse_date(input: &str) -> Result<NaiveDate, NdviError> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(ts.date_naive());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return Ok(ts.date());
    }
    Err(NdviError::InvalidDate {
        input: input.to_string(),
    })
}
