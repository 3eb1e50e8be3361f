//! Cumulative distribution lookup tables
//!
//! A [`CumulativeTable`] discretises the CDF of a [`DensityFunction`] over a
//! bounded interval into `N + 1` evenly spaced values. Tables are built once
//! and are read-only afterwards, so a single table can be shared by any
//! number of readers.
//!
//! # Example
//!
//! ```rust
//! use confidence_core::{DistributionParams, IntegrationLimits, NormalDensity};
//! use confidence_table::{TableBuilder, TrapezoidalBuilder};
//!
//! let params = DistributionParams::new(0.0, 1.0).unwrap();
//! let limits = IntegrationLimits::around(params, 6.0);
//! let table = TrapezoidalBuilder::new(1000).build(&NormalDensity::new(params), limits);
//!
//! assert_eq!(table.len(), 1001);
//! assert!((table.total_mass() - 1.0).abs() < 1e-3);
//! assert!((table.cdf_at(0.0).unwrap() - 0.5).abs() < 1e-2);
//! ```

pub mod builders;
pub mod reference;
pub mod traits;
pub mod types;

pub use builders::TrapezoidalBuilder;
pub use traits::TableBuilder;
pub use types::CumulativeTable;

pub use confidence_core::{DensityFunction, IntegrationLimits, Result};
