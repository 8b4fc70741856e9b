//! Error types for the ecotrend-whittaker crate.

/// Error type for all fallible operations in the ecotrend-whittaker crate.
///
/// A series too short for the difference order is not an error: it is
/// returned unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WhittakerError {
    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the input contains NaN or infinity.
    #[error("non-finite value at index {index}")]
    NonFiniteInput {
        /// Position of the first non-finite value.
        index: usize,
    },

    /// Returned when the Cholesky factorisation meets a non-positive pivot.
    #[error("system matrix is not positive definite (pivot {pivot} at row {row})")]
    NotPositiveDefinite {
        /// Row at which the factorisation failed.
        row: usize,
        /// The offending pivot value.
        pivot: f64,
    },
}
