//! Finite-difference operators.

use ndarray::Array2;

/// Coefficients of the order-`d` forward difference, lowest lag first.
///
/// `c[k] = (-1)^(d-k) · C(d, k)`, so order 1 is `[-1, 1]` and order 2 is
/// `[1, -2, 1]`.
pub fn difference_coefficients(order: usize) -> Vec<f64> {
    let mut coeffs = Vec::with_capacity(order + 1);
    let mut binom = 1.0_f64;
    for k in 0..=order {
        let sign = if (order - k) % 2 == 0 { 1.0 } else { -1.0 };
        coeffs.push(sign * binom);
        // C(d, k+1) = C(d, k) · (d - k) / (k + 1)
        binom = binom * (order - k) as f64 / (k + 1) as f64;
    }
    coeffs
}

/// The `(n - d) × n` difference matrix `D_d`.
///
/// Row `i` applies [`difference_coefficients`] to positions `i..=i+d`.
/// When `n <= d` the matrix has no rows.
pub fn difference_matrix(n: usize, order: usize) -> Array2<f64> {
    let rows = n.saturating_sub(order);
    let coeffs = difference_coefficients(order);
    let mut d = Array2::zeros((rows, n));
    for i in 0..rows {
        for (k, &c) in coeffs.iter().enumerate() {
            d[[i, i + k]] = c;
        }
    }
    d
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coefficients_low_orders() {
        assert_eq!(difference_coefficients(0), vec![1.0]);
        assert_eq!(difference_coefficients(1), vec![-1.0, 1.0]);
        assert_eq!(difference_coefficients(2), vec![1.0, -2.0, 1.0]);
        assert_eq!(difference_coefficients(3), vec![-1.0, 3.0, -3.0, 1.0]);
    }

    #[test]
    fn coefficients_sum_to_zero() {
        for order in 1..8 {
            let sum: f64 = difference_coefficients(order).iter().sum();
            assert!(sum.abs() < 1e-12, "order {order}: {sum}");
        }
    }

    #[test]
    fn second_order_matrix() {
        let d = difference_matrix(5, 2);
        assert_eq!(d.shape(), &[3, 5]);
        assert_eq!(d.row(0).to_vec(), vec![1.0, -2.0, 1.0, 0.0, 0.0]);
        assert_eq!(d.row(2).to_vec(), vec![0.0, 0.0, 1.0, -2.0, 1.0]);
    }

    #[test]
    fn too_short_has_no_rows() {
        assert_eq!(difference_matrix(2, 2).shape(), &[0, 2]);
        assert_eq!(difference_matrix(1, 3).shape(), &[0, 1]);
    }

    #[test]
    fn annihilates_polynomials_below_order() {
        // D_2 of a line is zero.
        let d = difference_matrix(6, 2);
        let line = ndarray::Array1::from_iter((0..6).map(|i| 3.0 + 0.5 * i as f64));
        assert!(d.dot(&line).iter().all(|v| v.abs() < 1e-12));
    }
}
