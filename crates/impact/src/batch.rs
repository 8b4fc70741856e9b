//! Parallel matching across many features.

use ecotrend_rainfall::SeasonalTotals;
use rayon::prelude::*;

use crate::error::ImpactError;
use crate::matcher::match_impact_years_detailed;
use crate::result::ImpactMatch;

/// Runs [`match_impact_years_detailed`] for each `(rainfall, intervention)`
/// entry in parallel.
///
/// Features are independent: results keep the input order and one
/// feature's failure does not affect the others.
#[tracing::instrument(level = "debug", skip_all, fields(n_features = features.len()))]
pub fn match_impact_years_batch<S>(
    features: &[(SeasonalTotals, S)],
) -> Vec<Result<ImpactMatch, ImpactError>>
where
    S: AsRef<str> + Sync,
{
    features
        .par_iter()
        .map(|(rainfall, intervention)| {
            match_impact_years_detailed(rainfall, intervention.as_ref())
        })
        .collect()
}
