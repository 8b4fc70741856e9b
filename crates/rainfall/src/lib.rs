//! # ecotrend-rainfall
//!
//! Seasonal precipitation totals from a feature's attribute table.
//!
//! Attribute tables carry one column per season and agricultural year, named
//! `precipitation_<season>_<YYYY>-<YYYY>`. This crate pulls those columns
//! out, coerces their values to numbers and sums the seasons of each year.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["FeatureAttributes"] -->|"rainfall_records()"| B["Vec of RainfallRecord"]
//!     B -->|"sum per ShortYear"| C["SeasonalTotals"]
//!     A -->|"aggregate_seasonal_rainfall()"| C
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use ecotrend_rainfall::{AttributeValue, FeatureAttributes, aggregate_seasonal_rainfall};
//!
//! let mut attrs = FeatureAttributes::new();
//! attrs.insert("precipitation_kharif_2022-2023".into(), AttributeValue::Number(10.0));
//! attrs.insert("precipitation_rabi_2022-2023".into(), AttributeValue::Text("5".into()));
//!
//! let totals = aggregate_seasonal_rainfall(&attrs);
//! assert_eq!(totals.get("22-23".parse().unwrap()), Some(15.0));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `season` | Cropping seasons (kharif, rabi, zaid) |
//! | `attribute` | Loosely typed attribute values and numeric coercion |
//! | `record` | Parsing precipitation attribute keys into records |
//! | `totals` | Per-year seasonal totals |
//! | `error` | Error types |

mod attribute;
mod error;
mod record;
mod season;
mod totals;

pub use attribute::{AttributeValue, FeatureAttributes};
pub use error::RainfallError;
pub use record::{RainfallRecord, parse_precipitation_key, rainfall_records};
pub use season::Season;
pub use totals::{SeasonalTotals, aggregate_seasonal_rainfall};
