//! Impact command: rainfall-matched pre/post years for each feature.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use ecotrend_impact::{ImpactError, ImpactMatch, match_impact_years_batch};
use ecotrend_rainfall::{
    AttributeValue, FeatureAttributes, SeasonalTotals, aggregate_seasonal_rainfall,
};
use ecotrend_years::ShortYear;

use crate::cli::ImpactArgs;
use crate::config::{EcotrendConfig, ImpactToml};
use crate::output::write_json;

/// One feature as delivered by the feature service.
#[derive(Debug, Deserialize)]
pub struct FeatureInput {
    #[serde(default)]
    pub id: serde_json::Value,
    /// Intervention label, as text (`"2022-23"`) or a bare number.
    #[serde(default)]
    pub intervention_year: Option<AttributeValue>,
    pub attributes: FeatureAttributes,
}

/// Impact years for one feature; year fields are null without impact data.
#[derive(Debug, Serialize, PartialEq)]
pub struct FeatureImpact {
    pub id: serde_json::Value,
    pub pre: Option<ShortYear>,
    pub post: Option<ShortYear>,
    pub pre_rainfall: Option<f64>,
    pub post_rainfall: Option<f64>,
    pub difference: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl FeatureImpact {
    fn from_result(id: serde_json::Value, result: Result<ImpactMatch, ImpactError>) -> Self {
        match result {
            Ok(m) => Self {
                id,
                pre: Some(m.pair().pre()),
                post: Some(m.pair().post()),
                pre_rainfall: Some(m.pre_rainfall()),
                post_rainfall: Some(m.post_rainfall()),
                difference: Some(m.difference()),
                reason: None,
            },
            Err(e) => Self::no_data(id, e.reason().to_string()),
        }
    }

    fn no_data(id: serde_json::Value, reason: String) -> Self {
        Self {
            id,
            pre: None,
            post: None,
            pre_rainfall: None,
            post_rainfall: None,
            difference: None,
            reason: Some(reason),
        }
    }
}

/// Run the impact year selection.
pub fn run(args: ImpactArgs) -> Result<()> {
    let _cmd = info_span!("impact").entered();
    let config = EcotrendConfig::load(args.config.as_deref())?;

    info!(path = %args.features.display(), "reading features");
    let raw = std::fs::read_to_string(&args.features)
        .with_context(|| format!("failed to read features: {}", args.features.display()))?;
    let features: Vec<serde_json::Value> =
        serde_json::from_str(&raw).context("features JSON must be an array")?;
    info!(n = features.len(), "features loaded");

    let results = compute_impacts(features, &config.impact);
    let n_matched = results.iter().filter(|r| r.pre.is_some()).count();
    info!(n_matched, n_total = results.len(), "impact years selected");

    write_json(&results, args.output.as_deref())
}

/// Aggregates rainfall and selects impact years for every feature.
///
/// Features are decoded one at a time; one that does not decode gets a
/// no-data entry with the decode error as its reason. Output order follows
/// input order.
pub fn compute_impacts(features: Vec<serde_json::Value>, config: &ImpactToml) -> Vec<FeatureImpact> {
    let decoded: Vec<Result<FeatureInput, FeatureImpact>> =
        features.into_iter().map(decode_feature).collect();

    let (ids, requests): (Vec<serde_json::Value>, Vec<(SeasonalTotals, String)>) = decoded
        .iter()
        .filter_map(|d| d.as_ref().ok())
        .map(|f| {
            let label = intervention_label(f, &config.intervention_attribute);
            (f.id.clone(), (aggregate_seasonal_rainfall(&f.attributes), label))
        })
        .unzip();

    let mut matched = ids
        .into_iter()
        .zip(match_impact_years_batch(&requests))
        .map(|(id, result)| {
            if let Err(e) = &result {
                warn!(id = %id, error = %e, "no impact years");
            }
            FeatureImpact::from_result(id, result)
        });

    decoded
        .into_iter()
        .filter_map(|d| match d {
            Ok(_) => matched.next(),
            Err(malformed) => Some(malformed),
        })
        .collect()
}

fn decode_feature(value: serde_json::Value) -> Result<FeatureInput, FeatureImpact> {
    let id = value.get("id").cloned().unwrap_or(serde_json::Value::Null);
    serde_json::from_value(value).map_err(|e| {
        warn!(id = %id, error = %e, "malformed feature");
        FeatureImpact::no_data(id, format!("malformed feature: {e}"))
    })
}

/// Intervention label from the feature, falling back to its attributes.
fn intervention_label(feature: &FeatureInput, attribute: &str) -> String {
    feature
        .intervention_year
        .as_ref()
        .or_else(|| feature.attributes.get(attribute))
        .and_then(AttributeValue::as_label)
        .unwrap_or_default()
}
