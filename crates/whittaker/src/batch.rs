//! Parallel smoothing across many series.

use rayon::prelude::*;

use crate::config::WhittakerConfig;
use crate::error::WhittakerError;
use crate::smoother::whittaker_smooth;

/// Smooths every series in parallel with the same configuration.
///
/// Results keep the input order. Each series succeeds or fails on its own.
#[tracing::instrument(level = "debug", skip_all, fields(n_series = series.len()))]
pub fn smooth_batch<S>(series: &[S], config: &WhittakerConfig) -> Vec<Result<Vec<f64>, WhittakerError>>
where
    S: AsRef<[f64]> + Sync,
{
    series
        .par_iter()
        .map(|y| whittaker_smooth(y.as_ref(), config))
        .collect()
}
