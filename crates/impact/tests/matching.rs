use approx::assert_relative_eq;
use ecotrend_impact::{ImpactError, NoImpactReason, match_impact_years, match_impact_years_detailed};
use ecotrend_rainfall::{FeatureAttributes, SeasonalTotals, aggregate_seasonal_rainfall};
use ecotrend_years::ShortYear;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn sy(s: &str) -> ShortYear {
    s.parse().unwrap()
}

fn totals(entries: &[(&str, f64)]) -> SeasonalTotals {
    entries.iter().map(|&(y, v)| (sy(y), v)).collect()
}

fn span(start: u8) -> ShortYear {
    ShortYear::new(start, start + 1).unwrap()
}

#[test]
fn attributes_to_pair() {
    let mut attrs = FeatureAttributes::new();
    for (key, value) in [
        ("precipitation_kharif_2019-2020", 540.0),
        ("precipitation_rabi_2019-2020", 30.0),
        ("precipitation_kharif_2020-2021", 700.0),
        ("precipitation_kharif_2022-2023", 800.0),
        ("precipitation_kharif_2023-2024", 560.0),
        ("precipitation_rabi_2023-2024", 20.0),
        ("precipitation_kharif_2024-2025", 690.0),
    ] {
        attrs.insert(key.to_string(), value.into());
    }
    let rainfall = aggregate_seasonal_rainfall(&attrs);

    let m = match_impact_years_detailed(&rainfall, "2021_2022").unwrap();
    // (19-20, 23-24) and (20-21, 24-25) both differ by 10; the later pre wins.
    assert_eq!(m.pair().pre(), sy("20-21"));
    assert_eq!(m.pair().post(), sy("24-25"));
    assert_relative_eq!(m.difference(), 10.0);
    assert_relative_eq!(m.pre_rainfall(), 700.0);
    assert_relative_eq!(m.post_rainfall(), 690.0);
}

#[test]
fn documented_example() {
    let rainfall = totals(&[
        ("20-21", 100.0),
        ("21-22", 100.0),
        ("23-24", 50.0),
        ("24-25", 110.0),
    ]);
    let pair = match_impact_years(&rainfall, "22-23").unwrap();
    assert_eq!((pair.pre(), pair.post()), (sy("21-22"), sy("24-25")));
}

#[test]
fn one_sided_data_never_yields_a_pair() {
    // Plenty of data after, none before.
    let after: Vec<(String, f64)> = (23..40)
        .map(|y| (span(y).to_string(), 100.0 + y as f64))
        .collect();
    let entries: Vec<(&str, f64)> = after.iter().map(|(y, v)| (y.as_str(), *v)).collect();
    let err = match_impact_years(&totals(&entries), "22-23").unwrap_err();
    assert!(matches!(
        err,
        ImpactError::NoImpactData {
            reason: NoImpactReason::NoPreInterventionYears { .. }
        }
    ));

    // Plenty of data before, none after.
    let before: Vec<(String, f64)> = (0..22)
        .map(|y| (span(y).to_string(), 100.0 + y as f64))
        .collect();
    let entries: Vec<(&str, f64)> = before.iter().map(|(y, v)| (y.as_str(), *v)).collect();
    let err = match_impact_years(&totals(&entries), "22-23").unwrap_err();
    assert!(matches!(
        err,
        ImpactError::NoImpactData {
            reason: NoImpactReason::NoPostInterventionYears { .. }
        }
    ));
}

#[test]
fn random_inputs_select_a_minimal_pair() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let intervention: u8 = rng.random_range(5..25);
        let mut rainfall = SeasonalTotals::new();
        for start in 0..30u8 {
            if rng.random_bool(0.7) {
                // A quarter of the years carry no data.
                let value = if rng.random_bool(0.25) {
                    0.0
                } else {
                    rng.random_range(1.0..1000.0_f64).round()
                };
                rainfall.add(span(start), value);
            }
        }
        let label = span(intervention).to_string();
        let pivot = 2000 + i32::from(intervention);

        let pre: Vec<(ShortYear, f64)> = rainfall
            .with_rainfall()
            .filter(|(y, _)| y.numeric_year() < pivot)
            .collect();
        let post: Vec<(ShortYear, f64)> = rainfall
            .with_rainfall()
            .filter(|(y, _)| y.numeric_year() > pivot)
            .collect();

        match match_impact_years_detailed(&rainfall, &label) {
            Ok(m) => {
                assert!(!pre.is_empty() && !post.is_empty());
                assert!(m.pair().pre().numeric_year() < pivot);
                assert!(m.pair().post().numeric_year() > pivot);
                assert!(m.pre_rainfall() > 0.0 && m.post_rainfall() > 0.0);

                // Minimal difference, then latest pre, then earliest post.
                let best = pre
                    .iter()
                    .flat_map(|&(_, pv)| post.iter().map(move |&(_, qv)| (pv - qv).abs()))
                    .fold(f64::INFINITY, f64::min);
                let expected = pre.iter().rev().find_map(|&(p, pv)| {
                    post.iter()
                        .find(|&&(_, qv)| (pv - qv).abs() == best)
                        .map(|&(q, _)| (p, q))
                });
                assert_eq!(Some((m.pair().pre(), m.pair().post())), expected);
                assert_relative_eq!(m.difference(), best);
            }
            Err(_) => assert!(pre.is_empty() || post.is_empty()),
        }
    }
}
