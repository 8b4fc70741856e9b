use approx::assert_relative_eq;
use chrono::{Duration, NaiveDate};
use ecotrend_ndvi::{NdviError, YearlyPayload, build_ndvi_series, interpolate_gaps};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn payload_for_year(year: i32, values: &[Option<f64>]) -> String {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let entries: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let date = start + Duration::days(16 * i as i64);
            match v {
                Some(x) => format!("\"{date}\": {x}"),
                None => format!("\"{date}\": null"),
            }
        })
        .collect();
    format!("{{{}}}", entries.join(", "))
}

#[test]
fn malformed_year_does_not_abort_merge() {
    let payloads = vec![
        YearlyPayload::new("2021", Some(payload_for_year(2021, &[Some(0.3), Some(0.4)]))),
        YearlyPayload::new("2022", Some("{\"2022-01-01\": 0.2,")),
        YearlyPayload::new("2020", Some(payload_for_year(2020, &[Some(0.1)]))),
    ];
    let series = build_ndvi_series(&payloads);

    assert_eq!(series.len(), 3);
    assert_eq!(series.values(), vec![Some(0.1), Some(0.3), Some(0.4)]);
    assert!(series.dates().windows(2).all(|w| w[0] <= w[1]));

    let (year, err) = &series.skipped()[0];
    assert_eq!(year, "2022");
    assert!(matches!(err, NdviError::MalformedPayload { .. }));
}

#[test]
fn merged_series_is_always_sorted() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut years: Vec<i32> = (2015..2025).collect();
        years.shuffle(&mut rng);
        let payloads: Vec<YearlyPayload> = years
            .iter()
            .map(|&y| {
                if rng.random_bool(0.2) {
                    YearlyPayload::new(y.to_string(), Some("garbage"))
                } else {
                    let n = rng.random_range(0..24);
                    let values: Vec<Option<f64>> =
                        (0..n).map(|_| Some(rng.random_range(-0.2..0.9))).collect();
                    YearlyPayload::new(y.to_string(), Some(payload_for_year(y, &values)))
                }
            })
            .collect();

        let series = build_ndvi_series(&payloads);
        assert!(series.dates().windows(2).all(|w| w[0] <= w[1]));
        assert!(series.samples().iter().all(|s| s.value().is_none_or(|v| v >= 0.0)));
    }
}

#[test]
fn interpolation_preserves_length_and_observations() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let n = rng.random_range(0..60);
        let input: Vec<Option<f64>> = (0..n)
            .map(|_| {
                if rng.random_bool(0.35) {
                    None
                } else if rng.random_bool(0.1) {
                    Some(-1.0)
                } else {
                    Some(rng.random_range(0.0..1.0))
                }
            })
            .collect();

        let out = interpolate_gaps(&input);
        assert_eq!(out.len(), input.len());
        assert!(out.iter().all(|v| v.is_finite()));
        for (filled, original) in out.iter().zip(&input) {
            if let Some(v) = original.filter(|v| *v >= 0.0) {
                assert_relative_eq!(*filled, v);
            }
        }
        // Interpolated values stay inside the observed range.
        let observed: Vec<f64> = input.iter().filter_map(|v| v.filter(|x| *x >= 0.0)).collect();
        if let (Some(lo), Some(hi)) = (
            observed.iter().copied().reduce(f64::min),
            observed.iter().copied().reduce(f64::max),
        ) {
            assert!(out.iter().all(|v| *v >= lo - 1e-12 && *v <= hi + 1e-12));
        }
    }
}

#[test]
fn series_then_interpolate() {
    let payloads = vec![YearlyPayload::new(
        "2023",
        Some(payload_for_year(2023, &[Some(0.2), None, Some(-0.3), Some(0.5)])),
    )];
    let series = build_ndvi_series(&payloads);
    let filled = interpolate_gaps(&series.values());
    let expected = [0.2, 0.3, 0.4, 0.5];
    for (a, b) in filled.iter().zip(expected) {
        assert_relative_eq!(*a, b, epsilon = 1e-12);
    }
}
