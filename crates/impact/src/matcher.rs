//! Rainfall-matched pre/post year selection.

use ecotrend_rainfall::SeasonalTotals;
use ecotrend_years::{InterventionYear, ShortYear};
use tracing::debug;

use crate::error::{ImpactError, NoImpactReason};
use crate::result::{ImpactMatch, ImpactYearPair};

/// Selects the pre/post intervention years with the closest rainfall.
///
/// See [`match_impact_years_detailed`] for the selection rules.
///
/// # Errors
///
/// Returns [`ImpactError::NoImpactData`] when no valid pair exists.
pub fn match_impact_years(
    rainfall: &SeasonalTotals,
    intervention_year: &str,
) -> Result<ImpactYearPair, ImpactError> {
    match_impact_years_detailed(rainfall, intervention_year).map(|m| m.pair())
}

/// Selects the pre/post intervention years with the closest rainfall and
/// reports the totals behind the choice.
///
/// 1. The intervention label is normalised; its numeric year is
///    `20` + the first two digits.
/// 2. Only years with a finite, strictly positive total take part.
/// 3. Years are ordered by numeric year and split into those strictly
///    before and strictly after the intervention. The intervention year
///    itself is in neither set.
/// 4. Every `(pre, post)` combination is scanned, ascending `pre` then
///    ascending `post`, and the smallest absolute rainfall difference wins.
///    On ties the latest `pre` year wins, and for that year the earliest
///    `post` year, so both sides lean towards the intervention.
///
/// # Errors
///
/// Returns [`ImpactError::NoImpactData`] if the label does not normalise,
/// `rainfall` is empty, or either side of the split is empty. A pair is
/// never built from one side alone.
#[tracing::instrument(level = "debug", skip(rainfall), fields(n_years = rainfall.len()))]
pub fn match_impact_years_detailed(
    rainfall: &SeasonalTotals,
    intervention_year: &str,
) -> Result<ImpactMatch, ImpactError> {
    let intervention = InterventionYear::parse(intervention_year).map_err(|source| {
        ImpactError::no_data(NoImpactReason::InvalidInterventionYear {
            input: intervention_year.to_string(),
            source,
        })
    })?;
    if rainfall.is_empty() {
        return Err(ImpactError::no_data(NoImpactReason::EmptyRainfall));
    }

    let pivot = intervention.numeric_year();
    let mut years: Vec<(ShortYear, f64)> = rainfall.with_rainfall().collect();
    years.sort_by_key(|(year, _)| year.numeric_year());

    let (pre_years, post_years): (Vec<_>, Vec<_>) = years
        .into_iter()
        .filter(|(year, _)| year.numeric_year() != pivot)
        .partition(|(year, _)| year.numeric_year() < pivot);
    debug!(
        n_pre = pre_years.len(),
        n_post = post_years.len(),
        "split years around intervention"
    );

    if pre_years.is_empty() {
        return Err(ImpactError::no_data(
            NoImpactReason::NoPreInterventionYears {
                intervention: intervention.short_year(),
            },
        ));
    }
    if post_years.is_empty() {
        return Err(ImpactError::no_data(
            NoImpactReason::NoPostInterventionYears {
                intervention: intervention.short_year(),
            },
        ));
    }

    let (first_pre, first_pre_total) = pre_years[0];
    let (first_post, first_post_total) = post_years[0];
    let mut best = ImpactMatch::new(
        ImpactYearPair::new(first_pre, first_post),
        first_pre_total,
        first_post_total,
    );
    for &(pre, pre_total) in &pre_years {
        let mut row_best =
            ImpactMatch::new(ImpactYearPair::new(pre, first_post), pre_total, first_post_total);
        for &(post, post_total) in &post_years {
            if (pre_total - post_total).abs() < row_best.difference() {
                row_best = ImpactMatch::new(ImpactYearPair::new(pre, post), pre_total, post_total);
            }
        }
        if row_best.difference() <= best.difference() {
            best = row_best;
        }
    }

    debug!(
        pre = %best.pair().pre(),
        post = %best.pair().post(),
        diff = best.difference(),
        "selected impact years"
    );
    Ok(best)
}
