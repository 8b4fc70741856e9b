//! Conversion from TOML/CLI settings to library configs.

use anyhow::{Context, Result};
use ecotrend_whittaker::WhittakerConfig;

use crate::config::SmoothingToml;

/// Builds a validated [`WhittakerConfig`]; CLI values take precedence.
pub fn build_whittaker_config(
    toml: &SmoothingToml,
    lambda: Option<f64>,
    order: Option<usize>,
) -> Result<WhittakerConfig> {
    let config = WhittakerConfig::new()
        .with_lambda(lambda.unwrap_or(toml.lambda))
        .with_order(order.unwrap_or(toml.order));
    config
        .validate()
        .context("invalid smoothing configuration")?;
    Ok(config)
}
