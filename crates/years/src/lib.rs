//! # ecotrend-years
//!
//! Canonical short-year spans for seasonal monitoring data.
//!
//! Upstream attribute tables label agricultural years in several ways
//! (`23-24`, `2023-24`, `2023_2024`, ...). Everything downstream keys on one
//! form, the two-digit span [`ShortYear`].
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str (YY-YY, YYYY-YY, YY_YYYY, ...)"] -->|"normalize_year()"| B["ShortYear"]
//!     B -->|".numeric_year()"| C["i32 (20YY)"]
//!     A -->|"InterventionYear::parse()"| D["InterventionYear"]
//!     D -->|".short_year()"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use ecotrend_years::{normalize_year, InterventionYear};
//!
//! let sy = normalize_year("2023_2024").unwrap();
//! assert_eq!(sy.to_string(), "23-24");
//! assert_eq!(sy.numeric_year(), 2023);
//!
//! let iy = InterventionYear::parse("2022-23").unwrap();
//! assert_eq!(iy.numeric_year(), 2022);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `short_year` | `ShortYear` newtype and the normaliser |
//! | `intervention` | Intervention year with raw, short and numeric forms |
//! | `error` | Error types |

mod error;
mod intervention;
mod short_year;

pub use error::YearError;
pub use intervention::InterventionYear;
pub use short_year::{ShortYear, normalize_year};
