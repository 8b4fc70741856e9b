//! Error types for the ecotrend-ndvi crate.

/// Error type for all fallible operations in the ecotrend-ndvi crate.
///
/// These are per-year failures: [`build_ndvi_series`](crate::build_ndvi_series)
/// records them and moves on to the next year.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NdviError {
    /// Returned when a year has no payload at all.
    #[error("no payload for year {year}")]
    MissingPayload {
        /// Year label of the payload.
        year: String,
    },

    /// Returned when a payload is not a JSON object of numbers or nulls.
    #[error("malformed payload: {reason}")]
    MalformedPayload {
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when a payload key is not a recognisable date.
    #[error("invalid date: {input:?}")]
    InvalidDate {
        /// The key that failed to parse.
        input: String,
    },
}
