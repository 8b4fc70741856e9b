//! The Whittaker smoother.

use tracing::debug;

use crate::cholesky::cholesky_solve;
use crate::config::WhittakerConfig;
use crate::difference::difference_matrix;
use crate::error::WhittakerError;

/// Smooths `y` by penalised least squares.
///
/// Solves `(I + λ D_dᵀ D_d) z = y` with `λ = config.lambda()` and
/// `d = config.order()`.
///
/// When `y.len() <= d` there is nothing to penalise and `y` is returned
/// unchanged.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`WhittakerError::InvalidConfig`] | `lambda <= 0`, non-finite `lambda`, or `order == 0` |
/// | [`WhittakerError::NonFiniteInput`] | NaN or infinity in `y` |
/// | [`WhittakerError::NotPositiveDefinite`] | numerical breakdown of the factorisation |
#[tracing::instrument(level = "debug", skip(y), fields(n = y.len(), lambda = config.lambda(), order = config.order()))]
pub fn whittaker_smooth(y: &[f64], config: &WhittakerConfig) -> Result<Vec<f64>, WhittakerError> {
    config.validate()?;
    if let Some(index) = y.iter().position(|v| !v.is_finite()) {
        return Err(WhittakerError::NonFiniteInput { index });
    }

    let n = y.len();
    let order = config.order();
    if n <= order {
        debug!(n, order, "series too short for difference order, returning input");
        return Ok(y.to_vec());
    }

    let d = difference_matrix(n, order);
    let mut system = d.t().dot(&d) * config.lambda();
    system.diag_mut().map_inplace(|v| *v += 1.0);

    cholesky_solve(&system, y)
}
