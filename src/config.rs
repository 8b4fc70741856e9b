use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level ecotrend configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EcotrendConfig {
    /// Whittaker smoothing settings.
    #[serde(default)]
    pub smoothing: SmoothingToml,

    /// Impact year selection settings.
    #[serde(default)]
    pub impact: ImpactToml,
}

impl EcotrendConfig {
    /// Reads the TOML file at `path`, or returns defaults when there is none.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SmoothingToml {
    #[serde(default = "default_lambda")]
    pub lambda: f64,
    #[serde(default = "default_order")]
    pub order: usize,
}

impl Default for SmoothingToml {
    fn default() -> Self {
        Self {
            lambda: default_lambda(),
            order: default_order(),
        }
    }
}

fn default_lambda() -> f64 {
    10.0
}
fn default_order() -> usize {
    2
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImpactToml {
    /// Attribute holding the intervention year when a feature has no
    /// top-level `intervention_year`.
    #[serde(default = "default_intervention_attribute")]
    pub intervention_attribute: String,
}

impl Default for ImpactToml {
    fn default() -> Self {
        Self {
            intervention_attribute: default_intervention_attribute(),
        }
    }
}

fn default_intervention_attribute() -> String {
    "intervention_year".to_string()
}
