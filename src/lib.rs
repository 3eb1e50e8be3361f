//! Two-sided confidence scores for observations of a known normal distribution
//!
//! This crate re-exports the workspace crates:
//!
//! - [`confidence_core`]: const exponential and density primitives, parameters, errors
//! - [`confidence_table`]: cumulative distribution tables
//! - [`confidence_metric`]: confidence evaluators and the process-wide reference metric
//!
//! plus the [`cli`] helpers used by the `normal-confidence` binary.
//!
//! # Example
//!
//! ```rust
//! use normal_confidence::{evaluate, format_score};
//!
//! assert_eq!(format_score(evaluate(0.043)), "0.999999");
//! assert_eq!(format_score(evaluate(-10.0)), "0");
//! ```

pub mod cli;

pub use confidence_core;
pub use confidence_metric;
pub use confidence_table;

pub use cli::{format_score, parse_observation, read_observation, LOG_ENV};
pub use confidence_core::{
    DensityFunction, DistributionParams, Error, IntegrationLimits, NormalDensity, Result,
};
pub use confidence_metric::{evaluate, ConfidenceEvaluator, MetricConfig};
pub use confidence_table::{CumulativeTable, TableBuilder, TrapezoidalBuilder};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
