//! Core primitives for the normal confidence metric
//!
//! This crate holds everything the cumulative table is derived from:
//!
//! - [`math`]: `const fn` exponential and normal density, usable in const contexts
//! - [`density`]: the [`DensityFunction`] abstraction the table builder integrates
//! - [`params`]: validated distribution parameters and integration limits
//! - [`error`]: the shared error type
//!
//! # Example
//!
//! ```rust
//! use confidence_core::{DensityFunction, DistributionParams, NormalDensity};
//!
//! let params = DistributionParams::new(0.0, 1.0).unwrap();
//! let normal = NormalDensity::new(params);
//!
//! // Peak of the standard normal is 1/sqrt(2*pi)
//! assert!((normal.density(0.0) - 0.398_942).abs() < 1e-4);
//! ```

pub mod density;
pub mod error;
pub mod math;
pub mod params;

pub use density::{DensityFunction, NormalDensity};
pub use error::{Error, Result};
pub use math::{exp, int_pow, normal_pdf, E, ROOT_OF_2PI, SERIES_ACCURACY};
pub use params::{DistributionParams, IntegrationLimits};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
