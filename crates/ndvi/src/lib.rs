//! # ecotrend-ndvi
//!
//! Vegetation-index (NDVI) series assembly and gap filling.
//!
//! NDVI arrives as one serialized `date -> value` payload per year. Payloads
//! go missing, some are truncated, and negative values mark cloudy or
//! otherwise unusable observations. This crate merges the usable years into
//! one date-ordered series and fills the gaps so the series can be smoothed.
//!
//! ## Pipeline
//!
//! ```text
//!  YearlyPayload × N ──parse_payload──▶ NdviSample … ──build_ndvi_series──▶ NdviSeries
//!                        (bad year skipped)                 (stable sort by date)
//!
//!  NdviSeries::values() ──interpolate_gaps──▶ Vec<f64>  (no gaps, same length)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use ecotrend_ndvi::{YearlyPayload, build_ndvi_series, interpolate_gaps};
//!
//! let payloads = vec![
//!     YearlyPayload::new("2022", Some(r#"{"2022-07-01": 0.41, "2022-06-15": -1}"#)),
//!     YearlyPayload::new("2023", Some("not json")),
//! ];
//! let series = build_ndvi_series(&payloads);
//! assert_eq!(series.len(), 2);
//! assert_eq!(series.skipped().len(), 1);
//!
//! let filled = interpolate_gaps(&series.values());
//! assert_eq!(filled, vec![0.41, 0.41]);
//! ```

mod error;
mod interpolate;
mod payload;
mod sample;
mod series;

pub use error::NdviError;
pub use interpolate::interpolate_gaps;
pub use payload::{YearlyPayload, parse_date, parse_payload};
pub use sample::NdviSample;
pub use series::{NdviSeries, build_ndvi_series};
