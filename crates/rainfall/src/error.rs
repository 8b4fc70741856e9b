//! Error types for the ecotrend-rainfall crate.

/// Error type for all fallible operations in the ecotrend-rainfall crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RainfallError {
    /// Returned when a season name is not one of kharif, rabi or zaid.
    #[error("unknown season: {name:?} (expected kharif, rabi or zaid)")]
    UnknownSeason {
        /// The unrecognised name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_unknown_season() {
        let err = RainfallError::UnknownSeason {
            name: "monsoon".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown season: \"monsoon\" (expected kharif, rabi or zaid)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<RainfallError>();
    }
}
