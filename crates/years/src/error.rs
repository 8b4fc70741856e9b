//! Error types for the ecotrend-years crate.

/// Error type for all fallible operations in the ecotrend-years crate.
///
/// Every variant describes a year-span string that cannot be brought into
/// the canonical `YY-YY` form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum YearError {
    /// Returned when the input is empty or whitespace only.
    #[error("year span is empty")]
    Empty,

    /// Returned when the input has no `-` or `_` separator, or more than one.
    #[error("year span {input:?} must contain exactly one '-' or '_' separator")]
    MissingSeparator {
        /// The offending input.
        input: String,
    },

    /// Returned when a part is neither 2 nor 4 characters long.
    #[error("year span {input:?} has a part of unsupported length {len} (expected 2 or 4)")]
    UnsupportedLength {
        /// The offending input.
        input: String,
        /// Length of the first part that failed.
        len: usize,
    },

    /// Returned when a kept part contains anything other than ASCII digits.
    #[error("year span {input:?} contains non-digit characters")]
    NonNumeric {
        /// The offending input.
        input: String,
    },
}
