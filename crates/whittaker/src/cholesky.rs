//! Dense Cholesky solve for symmetric positive-definite systems.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2};

use crate::error::WhittakerError;

/// Solves `a · x = b` for symmetric positive-definite `a`.
///
/// Factorises `a = L Lᵀ`, then runs forward and back substitution.
pub(crate) fn cholesky_solve(a: &Array2<f64>, b: &[f64]) -> Result<Vec<f64>, WhittakerError> {
    let n = a.nrows();
    debug_assert_eq!(a.ncols(), n);
    debug_assert_eq!(b.len(), n);

    let mut l = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let mut sum = 0.0;
            for k in 0..j {
                sum += l[[i, k]] * l[[j, k]];
            }
            if i == j {
                let pivot = a[[i, i]] - sum;
                if pivot <= 0.0 || !pivot.is_finite() {
                    return Err(WhittakerError::NotPositiveDefinite { row: i, pivot });
                }
                l[[i, j]] = pivot.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }

    // L · w = b
    let mut w = Array1::<f64>::zeros(n);
    for i in 0..n {
        let mut sum = 0.0;
        for k in 0..i {
            sum += l[[i, k]] * w[k];
        }
        w[i] = (b[i] - sum) / l[[i, i]];
    }

    // Lᵀ · x = w
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for k in (i + 1)..n {
            sum += l[[k, i]] * x[k];
        }
        x[i] = (w[i] - sum) / l[[i, i]];
    }

    Ok(x)
}
