//! Process-wide reference metric
//!
//! The table is built on first use and shared read-only afterwards.

use crate::config::MetricConfig;
use crate::evaluator::ConfidenceEvaluator;
use confidence_core::NormalDensity;
use lazy_static::lazy_static;
use tracing::debug;

lazy_static! {
    static ref METRIC: ConfidenceEvaluator<NormalDensity> = {
        let config = MetricConfig::reference();
        debug!(params = %config.params, resolution = config.resolution, "initialising reference metric");
        ConfidenceEvaluator::new(
            NormalDensity::new(config.params),
            config.limits(),
            config.resolution,
        )
    };
}

/// The reference evaluator for N(0.043, 0.026)
pub fn metric() -> &'static ConfidenceEvaluator<NormalDensity> {
    &METRIC
}

/// Confidence score of `x` under the reference metric
pub fn evaluate(x: f32) -> f32 {
    METRIC.evaluate(x)
}
