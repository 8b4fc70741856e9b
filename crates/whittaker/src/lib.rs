//! # ecotrend-whittaker
//!
//! Whittaker smoothing: penalised least squares with a finite-difference
//! roughness penalty.
//!
//! For observations `y` the smoother returns the `z` minimising
//!
//! ```text
//! ‖y − z‖² + λ · ‖D_d z‖²
//! ```
//!
//! where `D_d` is the order-`d` difference operator. The minimiser solves
//! the symmetric positive-definite system `(I + λ D_dᵀ D_d) z = y`, done
//! here with a dense Cholesky factorisation. Series in this domain are a
//! few dozen points, so the dense `O(n³)` solve is not a bottleneck.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["WhittakerConfig::new()"] -->|".with_lambda() / .with_order()"| B["WhittakerConfig"]
//!     C["&[f64]"] -->|"whittaker_smooth(&y, &config)?"| D["Vec of f64"]
//!     E["&[NdviSample]"] -->|"smooth_ndvi_series()"| F["Vec of SmoothedPoint"]
//!     G["&[YearlyPayload]"] -->|"smooth_ndvi_payloads()"| F
//! ```
//!
//! ## Choosing λ
//!
//! `lambda` trades fidelity for smoothness. The default of `10.0` with
//! `order = 2` keeps the seasonal NDVI cycle while removing single-date
//! noise for roughly fortnightly sampling. Larger values flatten the cycle;
//! values near zero reproduce the input.
//!
//! ## Quick start
//!
//! ```
//! use ecotrend_whittaker::{WhittakerConfig, whittaker_smooth};
//!
//! let config = WhittakerConfig::new().with_lambda(5.0);
//! let z = whittaker_smooth(&[0.2, 0.5, 0.3, 0.6, 0.4], &config).unwrap();
//! assert_eq!(z.len(), 5);
//! ```

mod batch;
mod cholesky;
mod config;
mod difference;
mod error;
mod pipeline;
mod smoother;

pub use batch::smooth_batch;
pub use config::WhittakerConfig;
pub use difference::{difference_coefficients, difference_matrix};
pub use error::WhittakerError;
pub use pipeline::{SmoothedPoint, smooth_ndvi_payloads, smooth_ndvi_series};
pub use smoother::whittaker_smooth;
