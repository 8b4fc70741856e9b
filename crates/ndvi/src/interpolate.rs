//! Linear gap filling for index-ordered series.

use crate::sample::is_observation;

/// Fills missing entries by linear interpolation over position.
///
/// An entry is missing when it is `None`, negative or non-finite. For each
/// missing entry:
///
/// - between two observations: linear in index between them;
/// - before the first observation: the first observation;
/// - after the last observation: the last observation;
/// - no observation anywhere: `0.0`.
///
/// The output has the input's length and contains only finite values.
///
/// ```
/// use ecotrend_ndvi::interpolate_gaps;
///
/// assert_eq!(interpolate_gaps(&[Some(1.0), None, None, Some(4.0)]), vec![1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(interpolate_gaps(&[None, None, Some(3.0)]), vec![3.0, 3.0, 3.0]);
/// assert_eq!(interpolate_gaps(&[Some(2.0), None, None]), vec![2.0, 2.0, 2.0]);
/// ```
pub fn interpolate_gaps(values: &[Option<f64>]) -> Vec<f64> {
    let cleaned: Vec<Option<f64>> = values
        .iter()
        .map(|v| v.filter(|x| is_observation(*x)))
        .collect();
    let known: Vec<(usize, f64)> = cleaned
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|x| (i, x)))
        .collect();

    if known.is_empty() {
        return vec![0.0; values.len()];
    }

    let mut out = Vec::with_capacity(values.len());
    let mut prev: Option<(usize, f64)> = None;
    // Index into `known` of the first observation strictly after `i`.
    let mut next_k = 0;

    for (i, value) in cleaned.iter().enumerate() {
        while next_k < known.len() && known[next_k].0 <= i {
            next_k += 1;
        }
        if let Some(v) = *value {
            out.push(v);
            prev = Some((i, v));
            continue;
        }
        let filled = match (prev, known.get(next_k).copied()) {
            (Some((i0, v0)), Some((i1, v1))) => {
                let t = (i - i0) as f64 / (i1 - i0) as f64;
                v0 + (v1 - v0) * t
            }
            (None, Some((_, v1))) => v1,
            (Some((_, v0)), None) => v0,
            (None, None) => 0.0,
        };
        out.push(filled);
    }

    out
}
