//! Error types for the ecotrend-impact crate.

use std::fmt;

use ecotrend_years::{ShortYear, YearError};

/// Why no impact year pair could be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoImpactReason {
    /// The intervention label is not a recognised year span.
    InvalidInterventionYear {
        /// The label as supplied.
        input: String,
        /// Underlying normalisation failure.
        source: YearError,
    },
    /// The rainfall mapping has no entries at all.
    EmptyRainfall,
    /// No year with positive rainfall precedes the intervention.
    NoPreInterventionYears {
        /// Normalised intervention year.
        intervention: ShortYear,
    },
    /// No year with positive rainfall follows the intervention.
    NoPostInterventionYears {
        /// Normalised intervention year.
        intervention: ShortYear,
    },
}

impl fmt::Display for NoImpactReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoImpactReason::InvalidInterventionYear { input, source } => {
                write!(f, "intervention year {input:?} is invalid: {source}")
            }
            NoImpactReason::EmptyRainfall => f.write_str("rainfall mapping is empty"),
            NoImpactReason::NoPreInterventionYears { intervention } => {
                write!(f, "no year with rainfall before {intervention}")
            }
            NoImpactReason::NoPostInterventionYears { intervention } => {
                write!(f, "no year with rainfall after {intervention}")
            }
        }
    }
}

/// Error type for all fallible operations in the ecotrend-impact crate.
///
/// A missing pair is an expected outcome for features with short or patchy
/// rainfall records. Callers typically render it as "no data".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImpactError {
    /// Returned when no valid pre/post pair exists.
    #[error("no impact data: {reason}")]
    NoImpactData {
        /// Which precondition failed.
        reason: NoImpactReason,
    },
}

impl ImpactError {
    pub(crate) fn no_data(reason: NoImpactReason) -> Self {
        ImpactError::NoImpactData { reason }
    }

    /// The precondition that failed.
    pub fn reason(&self) -> &NoImpactReason {
        match self {
            ImpactError::NoImpactData { reason } => reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_rainfall() {
        let err = ImpactError::no_data(NoImpactReason::EmptyRainfall);
        assert_eq!(err.to_string(), "no impact data: rainfall mapping is empty");
    }

    #[test]
    fn error_invalid_intervention() {
        let err = ImpactError::no_data(NoImpactReason::InvalidInterventionYear {
            input: "abc".to_string(),
            source: YearError::MissingSeparator {
                input: "abc".to_string(),
            },
        });
        assert_eq!(
            err.to_string(),
            "no impact data: intervention year \"abc\" is invalid: \
             year span \"abc\" must contain exactly one '-' or '_' separator"
        );
    }

    #[test]
    fn error_no_pre_years() {
        let err = ImpactError::no_data(NoImpactReason::NoPreInterventionYears {
            intervention: "22-23".parse().unwrap(),
        });
        assert_eq!(
            err.to_string(),
            "no impact data: no year with rainfall before 22-23"
        );
    }

    #[test]
    fn error_no_post_years() {
        let err = ImpactError::no_data(NoImpactReason::NoPostInterventionYears {
            intervention: "22-23".parse().unwrap(),
        });
        assert_eq!(
            err.to_string(),
            "no impact data: no year with rainfall after 22-23"
        );
    }

    #[test]
    fn reason_accessor() {
        let err = ImpactError::no_data(NoImpactReason::EmptyRainfall);
        assert_eq!(err.reason(), &NoImpactReason::EmptyRainfall);
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<ImpactError>();
    }
}
