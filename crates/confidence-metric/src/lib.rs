//! Two-sided confidence scores for a known distribution
//!
//! The score of an observation `x` is `2 * min(P(X < x), P(X > x))`: `1` at the
//! median, falling towards `0` in either tail. Scores are looked up in a
//! [`CumulativeTable`] built once per evaluator, so each query is O(1).
//!
//! # Examples
//!
//! ## Process-wide reference metric
//!
//! ```rust
//! // N(0.043, 0.026), integrated over +/- 6 sigma in 10000 steps
//! let score = confidence_metric::evaluate(0.043);
//! assert!((score - 1.0).abs() < 1e-3);
//!
//! // Outside the integration limits the score is zero
//! assert_eq!(confidence_metric::evaluate(-10.0), 0.0);
//! ```
//!
//! ## Custom parameters
//!
//! ```rust
//! use confidence_core::DistributionParams;
//! use confidence_metric::{ConfidenceEvaluator, MetricConfig};
//!
//! let config = MetricConfig::new(DistributionParams::new(10.0, 2.0).unwrap())
//!     .with_resolution(2_000);
//! let evaluator = ConfidenceEvaluator::from_config(&config).unwrap();
//!
//! // Two standard deviations out: roughly 2 * 0.0228
//! let score = evaluator.evaluate(14.0);
//! assert!((score - 0.0455).abs() < 0.01);
//! ```

pub mod config;
pub mod evaluator;
pub mod metric;

pub use config::{MetricConfig, REFERENCE_PARAMS, REFERENCE_RESOLUTION, SIGMA_SPAN};
pub use evaluator::ConfidenceEvaluator;
pub use metric::{evaluate, metric};

pub use confidence_core::{Error, Result};
pub use confidence_table::CumulativeTable;
