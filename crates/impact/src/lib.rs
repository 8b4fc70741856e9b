//! # ecotrend-impact
//!
//! Picks the pre/post intervention year pair whose rainfall is most alike.
//!
//! Vegetation and water signals follow rainfall closely. Comparing a wet
//! year before an intervention with a dry year after it says more about the
//! monsoon than about the intervention, so the comparison years are chosen
//! to minimise the difference in seasonal rainfall.
//!
//! ## Pipeline
//!
//! ```text
//!  SeasonalTotals ──┐
//!                   ├─▶ keep totals > 0 ─▶ split pre / post ─▶ min |Δ rainfall| ─▶ ImpactMatch
//!  "2022-23" ───────┘        (years equal to the intervention are dropped)
//! ```
//!
//! ## Quick start
//!
//! ```
//! use ecotrend_impact::match_impact_years;
//! use ecotrend_rainfall::SeasonalTotals;
//!
//! let rainfall: SeasonalTotals = [("20-21", 100.0), ("21-22", 100.0), ("23-24", 50.0), ("24-25", 110.0)]
//!     .into_iter()
//!     .map(|(y, v)| (y.parse().unwrap(), v))
//!     .collect();
//!
//! let pair = match_impact_years(&rainfall, "22-23").unwrap();
//! assert_eq!(pair.pre().to_string(), "21-22");
//! assert_eq!(pair.post().to_string(), "24-25");
//! ```

mod batch;
mod error;
mod matcher;
mod result;

pub use batch::match_impact_years_batch;
pub use error::{ImpactError, NoImpactReason};
pub use matcher::{match_impact_years, match_impact_years_detailed};
pub use result::{ImpactMatch, ImpactYearPair};
