//! Loosely typed attribute values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Attribute table of a single geographic feature.
pub type FeatureAttributes = BTreeMap<String, AttributeValue>;

/// A single attribute value as delivered by the data service.
///
/// Columns are not reliably typed upstream: the same precipitation column
/// may arrive as a number, a numeric string, or be missing. Arrays and
/// objects are kept as [`AttributeValue::Other`] and never count as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// A JSON number.
    Number(f64),
    /// A string, possibly holding a number.
    Text(String),
    /// A boolean flag.
    Bool(bool),
    /// An explicit null.
    Null,
    /// Any other JSON value (array or object).
    Other(serde_json::Value),
}

impl AttributeValue {
    /// Coerces the value to a finite number, falling back to `0.0`.
    ///
    /// Numeric strings are parsed after trimming. Non-numeric strings,
    /// booleans, nulls, NaN and infinities all count as `0.0`.
    pub fn as_number_or_zero(&self) -> f64 {
        let value = match self {
            AttributeValue::Number(v) => *v,
            AttributeValue::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            AttributeValue::Bool(_) | AttributeValue::Null | AttributeValue::Other(_) => 0.0,
        };
        if value.is_finite() { value } else { 0.0 }
    }

    /// Returns the value as a label: text as-is, finite numbers in their
    /// shortest form (`2022.0` becomes `"2022"`).
    pub fn as_label(&self) -> Option<String> {
        match self {
            AttributeValue::Text(s) => Some(s.clone()),
            AttributeValue::Number(v) if v.is_finite() => Some(v.to_string()),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}
