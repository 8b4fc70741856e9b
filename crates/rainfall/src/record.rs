//! Precipitation attribute keys and the records parsed from them.

use ecotrend_years::ShortYear;
use serde::Serialize;
use tracing::trace;

use crate::attribute::AttributeValue;
use crate::season::Season;

const KEY_PREFIX: &str = "precipitation_";

/// One seasonal precipitation value for one agricultural year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RainfallRecord {
    season: Season,
    long_year: String,
    short_year: ShortYear,
    value: f64,
}

impl RainfallRecord {
    /// Cropping season.
    pub fn season(&self) -> Season {
        self.season
    }

    /// Year span as written in the key, e.g. `2022-2023`.
    pub fn long_year(&self) -> &str {
        &self.long_year
    }

    /// Normalised year span, e.g. `22-23`.
    pub fn short_year(&self) -> ShortYear {
        self.short_year
    }

    /// Coerced precipitation value (`0.0` when missing or non-numeric).
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Parses a `precipitation_<season>_<YYYY>-<YYYY>` key.
///
/// Returns the season, the long year span and its short form, or `None` when
/// the key does not follow the pattern exactly.
///
/// ```
/// use ecotrend_rainfall::{Season, parse_precipitation_key};
///
/// let (season, long, short) = parse_precipitation_key("precipitation_rabi_2021-2022").unwrap();
/// assert_eq!(season, Season::Rabi);
/// assert_eq!(long, "2021-2022");
/// assert_eq!(short.to_string(), "21-22");
/// assert!(parse_precipitation_key("precipitation_rabi_21-22").is_none());
/// ```
pub fn parse_precipitation_key(key: &str) -> Option<(Season, &str, ShortYear)> {
    let rest = key.strip_prefix(KEY_PREFIX)?;
    let (season, long_year) = rest.split_once('_')?;
    let season: Season = season.parse().ok()?;
    let (first, second) = long_year.split_once('-')?;
    let start = last_two_of_four(first)?;
    let end = last_two_of_four(second)?;
    let short_year = ShortYear::new(start, end)?;
    Some((season, long_year, short_year))
}

/// Last two digits of a four-digit year.
fn last_two_of_four(year: &str) -> Option<u8> {
    let bytes = year.as_bytes();
    if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some((bytes[2] - b'0') * 10 + (bytes[3] - b'0'))
}

/// Extracts every seasonal precipitation record from an attribute table.
///
/// Keys that do not match the precipitation pattern are skipped. Records are
/// returned in the iteration order of `attributes`.
pub fn rainfall_records<'a, K, I>(attributes: I) -> Vec<RainfallRecord>
where
    K: AsRef<str> + 'a,
    I: IntoIterator<Item = (&'a K, &'a AttributeValue)>,
{
    attributes
        .into_iter()
        .filter_map(|(key, value)| {
            let key = key.as_ref();
            let Some((season, long_year, short_year)) = parse_precipitation_key(key) else {
                trace!(key, "not a precipitation attribute");
                return None;
            };
            Some(RainfallRecord {
                season,
                long_year: long_year.to_string(),
                short_year,
                value: value.as_number_or_zero(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::FeatureAttributes;

    #[test]
    fn parse_valid_key() {
        let (season, long, short) =
            parse_precipitation_key("precipitation_kharif_2022-2023").unwrap();
        assert_eq!(season, Season::Kharif);
        assert_eq!(long, "2022-2023");
        assert_eq!(short.to_string(), "22-23");
    }

    #[test]
    fn parse_rejects_other_keys() {
        for key in [
            "precipitation_kharif_22-23",
            "precipitation_monsoon_2022-2023",
            "precipitation_kharif_2022_2023",
            "precipitation_kharif_2022-2023_extra",
            "rainfall_kharif_2022-2023",
            "precipitation_kharif",
            "Precipitation_kharif_2022-2023",
            "precipitation_kharif_20a2-2023",
        ] {
            assert!(parse_precipitation_key(key).is_none(), "{key}");
        }
    }

    #[test]
    fn records_skip_unmatched_and_coerce_values() {
        let mut attrs = FeatureAttributes::new();
        attrs.insert("name".into(), AttributeValue::from("pond 7"));
        attrs.insert(
            "precipitation_kharif_2019-2020".into(),
            AttributeValue::Number(410.0),
        );
        attrs.insert(
            "precipitation_zaid_2019-2020".into(),
            AttributeValue::from("oops"),
        );

        let records = rainfall_records(&attrs);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].season(), Season::Kharif);
        assert_eq!(records[0].long_year(), "2019-2020");
        assert_eq!(records[0].value(), 410.0);
        assert_eq!(records[1].season(), Season::Zaid);
        assert_eq!(records[1].value(), 0.0);
    }
}
