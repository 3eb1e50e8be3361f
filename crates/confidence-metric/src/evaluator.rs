//! Confidence score evaluation

use crate::config::MetricConfig;
use confidence_core::{DensityFunction, IntegrationLimits, NormalDensity, Result};
use confidence_table::{CumulativeTable, TableBuilder, TrapezoidalBuilder};
use tracing::debug;

/// Maps observations to two-sided confidence scores
///
/// Owns an immutable [`CumulativeTable`] of its density. For `x` strictly
/// inside the integration limits the score is `2 * min(c, 1 - c)` where `c`
/// is the table value of the step containing `x`. At or beyond the limits,
/// and for NaN, the score is `0`; the true tail mass there is ignored.
#[derive(Debug, Clone)]
pub struct ConfidenceEvaluator<D = NormalDensity> {
    density: D,
    table: CumulativeTable,
}

impl<D: DensityFunction> ConfidenceEvaluator<D> {
    /// Build the table for `density` with the trapezoidal builder
    pub fn new(density: D, limits: IntegrationLimits, resolution: usize) -> Self {
        Self::with_builder(density, limits, &TrapezoidalBuilder::new(resolution))
    }

    /// Build the table with a custom [`TableBuilder`]
    pub fn with_builder<B: TableBuilder>(density: D, limits: IntegrationLimits, builder: &B) -> Self {
        let table = builder.build(&density, limits);
        Self { density, table }
    }

    /// Confidence score of a single observation, in `[0, 1]`
    #[inline]
    pub fn evaluate(&self, x: f32) -> f32 {
        match self.table.cdf_at(x) {
            Some(cdf) => 2.0 * cdf.min(1.0 - cdf),
            None => 0.0,
        }
    }

    pub fn evaluate_batch(&self, observations: &[f32]) -> Vec<f32> {
        observations.iter().map(|&x| self.evaluate(x)).collect()
    }

    pub fn table(&self) -> &CumulativeTable {
        &self.table
    }

    pub fn density(&self) -> &D {
        &self.density
    }
}

impl ConfidenceEvaluator<NormalDensity> {
    /// Validate `config` and build an evaluator for its normal distribution
    pub fn from_config(config: &MetricConfig) -> Result<Self> {
        config.validate()?;
        debug!(params = %config.params, resolution = config.resolution, "building confidence evaluator");
        Ok(Self::new(
            NormalDensity::new(config.params),
            config.limits(),
            config.resolution,
        ))
    }
}
