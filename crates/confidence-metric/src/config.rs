//! Configuration for confidence evaluators

use confidence_core::{DistributionParams, Error, IntegrationLimits, Result};

/// Parameters of the shipped metric: N(0.043, 0.026)
pub const REFERENCE_PARAMS: DistributionParams = DistributionParams::new_unchecked(0.043, 0.026);

/// Half-width of the integration limits, in standard deviations
pub const SIGMA_SPAN: f32 = 6.0;

/// Integration steps of the shipped metric
pub const REFERENCE_RESOLUTION: usize = 10_000;

/// Everything needed to build a [`ConfidenceEvaluator`](crate::ConfidenceEvaluator)
/// for a normal distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricConfig {
    /// Distribution the observations are drawn from
    pub params: DistributionParams,

    /// Integrate over `mean +/- sigma_span * stdev`
    ///
    /// Scores outside this range are zero, which drops the true tail mass
    /// beyond it. Keep it wide enough that this mass is negligible.
    pub sigma_span: f32,

    /// Number of table steps
    pub resolution: usize,
}

impl MetricConfig {
    /// The configuration the command line tool is built with
    pub const fn reference() -> Self {
        Self {
            params: REFERENCE_PARAMS,
            sigma_span: SIGMA_SPAN,
            resolution: REFERENCE_RESOLUTION,
        }
    }

    /// Reference span and resolution for other distribution parameters
    pub const fn new(params: DistributionParams) -> Self {
        Self {
            params,
            sigma_span: SIGMA_SPAN,
            resolution: REFERENCE_RESOLUTION,
        }
    }

    pub const fn with_sigma_span(mut self, sigma_span: f32) -> Self {
        self.sigma_span = sigma_span;
        self
    }

    pub const fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    pub const fn limits(&self) -> IntegrationLimits {
        IntegrationLimits::around(self.params, self.sigma_span)
    }

    /// Check the configuration can produce a usable table
    pub fn validate(&self) -> Result<()> {
        DistributionParams::new(self.params.mean(), self.params.stdev())?;
        if !self.sigma_span.is_finite() || self.sigma_span <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "Sigma span {} must be finite and > 0",
                self.sigma_span
            )));
        }
        if self.resolution == 0 {
            return Err(Error::zero_resolution());
        }
        // The span can still collapse in f32 for a tiny stdev far from zero
        let limits = self.limits();
        IntegrationLimits::new(limits.lower(), limits.upper())?;
        Ok(())
    }
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_config() {
        let config = MetricConfig::default();
        assert_eq!(config, MetricConfig::reference());
        assert_eq!(config.params.mean(), 0.043);
        assert_eq!(config.params.stdev(), 0.026);
        assert_eq!(config.resolution, 10_000);
        assert!(config.validate().is_ok());

        let limits = config.limits();
        assert_relative_eq!(limits.lower(), -0.113, max_relative = 1e-5);
        assert_relative_eq!(limits.upper(), 0.199, max_relative = 1e-5);
    }

    #[test]
    fn test_builder_methods() {
        let params = DistributionParams::new(1.0, 0.5).unwrap();
        let config = MetricConfig::new(params).with_sigma_span(4.0).with_resolution(100);
        assert_eq!(config.sigma_span, 4.0);
        assert_eq!(config.resolution, 100);
        assert_eq!(config.limits().lower(), -1.0);
        assert_eq!(config.limits().upper(), 3.0);
    }

    #[test]
    fn test_invalid_configs() {
        let zero_resolution = MetricConfig::reference().with_resolution(0);
        assert!(matches!(zero_resolution.validate(), Err(Error::InvalidParameter(_))));

        let negative_span = MetricConfig::reference().with_sigma_span(-1.0);
        assert!(negative_span.validate().is_err());

        let nan_span = MetricConfig::reference().with_sigma_span(f32::NAN);
        assert!(nan_span.validate().is_err());

        let bad_params = MetricConfig::new(DistributionParams::new_unchecked(0.0, 0.0));
        assert!(bad_params.validate().is_err());

        let collapsed = MetricConfig::new(DistributionParams::new_unchecked(1.0e6, 1.0e-6));
        assert!(collapsed.validate().is_err());
    }
}
