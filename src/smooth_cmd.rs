//! Smooth command: yearly NDVI payloads to one smoothed curve.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ecotrend_ndvi::YearlyPayload;
use ecotrend_whittaker::{SmoothedPoint, WhittakerConfig, smooth_ndvi_payloads};

use crate::cli::SmoothArgs;
use crate::config::EcotrendConfig;
use crate::convert::build_whittaker_config;
use crate::output::write_json;

/// Run the NDVI smoothing pipeline.
pub fn run(args: SmoothArgs) -> Result<()> {
    let _cmd = info_span!("smooth").entered();
    let config = EcotrendConfig::load(args.config.as_deref())?;
    let whittaker = build_whittaker_config(&config.smoothing, args.lambda, args.order)?;
    info!(lambda = whittaker.lambda(), order = whittaker.order(), "smoothing config");

    info!(path = %args.payloads.display(), "reading payloads");
    let raw = std::fs::read_to_string(&args.payloads)
        .with_context(|| format!("failed to read payloads: {}", args.payloads.display()))?;
    let payloads = parse_payload_map(&raw)?;

    let points = smooth(&payloads, &whittaker)?;
    info!(n_points = points.len(), "smoothed NDVI curve");

    write_json(&points, args.output.as_deref())
}

/// Reads a `{ year: payload }` JSON object.
///
/// A payload may be the serialized text itself, an inline object, or null.
pub fn parse_payload_map(raw: &str) -> Result<Vec<YearlyPayload>> {
    let map: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(raw).context("failed to parse payloads JSON")?;
    Ok(map
        .into_iter()
        .map(|(year, value)| {
            let body = match value {
                serde_json::Value::Null => None,
                serde_json::Value::String(text) => Some(text),
                other => Some(other.to_string()),
            };
            YearlyPayload::new(year, body)
        })
        .collect())
}

fn smooth(payloads: &[YearlyPayload], config: &WhittakerConfig) -> Result<Vec<SmoothedPoint>> {
    smooth_ndvi_payloads(payloads, config).context("NDVI smoothing failed")
}
