//! Output types for impact year matching.

use ecotrend_years::ShortYear;
use serde::Serialize;

/// The selected before/after comparison years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactYearPair {
    pre: ShortYear,
    post: ShortYear,
}

impl ImpactYearPair {
    pub(crate) fn new(pre: ShortYear, post: ShortYear) -> Self {
        Self { pre, post }
    }

    /// Year before the intervention.
    pub fn pre(&self) -> ShortYear {
        self.pre
    }

    /// Year after the intervention.
    pub fn post(&self) -> ShortYear {
        self.post
    }
}

/// An [`ImpactYearPair`] together with the rainfall that justified it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactMatch {
    #[serde(flatten)]
    pair: ImpactYearPair,
    pre_rainfall: f64,
    post_rainfall: f64,
}

impl ImpactMatch {
    pub(crate) fn new(pair: ImpactYearPair, pre_rainfall: f64, post_rainfall: f64) -> Self {
        Self {
            pair,
            pre_rainfall,
            post_rainfall,
        }
    }

    /// The selected years.
    pub fn pair(&self) -> ImpactYearPair {
        self.pair
    }

    /// Total seasonal rainfall of the pre year.
    pub fn pre_rainfall(&self) -> f64 {
        self.pre_rainfall
    }

    /// Total seasonal rainfall of the post year.
    pub fn post_rainfall(&self) -> f64 {
        self.post_rainfall
    }

    /// Absolute rainfall difference between the two years.
    pub fn difference(&self) -> f64 {
        (self.pre_rainfall - self.post_rainfall).abs()
    }
}
