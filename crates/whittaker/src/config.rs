//! Smoother configuration.

use serde::{Deserialize, Serialize};

use crate::error::WhittakerError;

/// Parameters of the Whittaker smoother.
///
/// # Example
///
/// ```
/// use ecotrend_whittaker::WhittakerConfig;
///
/// let config = WhittakerConfig::new().with_lambda(100.0).with_order(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhittakerConfig {
    lambda: f64,
    order: usize,
}

impl WhittakerConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `lambda = 10.0`, `order = 2`.
    pub fn new() -> Self {
        Self {
            lambda: 10.0,
            order: 2,
        }
    }

    /// Sets the smoothing weight.
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Sets the difference order of the roughness penalty.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Returns the smoothing weight.
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Returns the difference order.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), WhittakerError> {
        if !self.lambda.is_finite() || self.lambda <= 0.0 {
            return Err(WhittakerError::InvalidConfig {
                reason: format!("lambda must be finite and positive, got {}", self.lambda),
            });
        }
        if self.order == 0 {
            return Err(WhittakerError::InvalidConfig {
                reason: "order must be >= 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for WhittakerConfig {
    fn default() -> Self {
        Self::new()
    }
}
