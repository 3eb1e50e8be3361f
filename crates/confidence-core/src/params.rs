//! Distribution parameters and integration limits

use crate::error::{Error, Result};
use std::fmt;

/// Mean and standard deviation of a normal distribution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionParams {
    mean: f32,
    stdev: f32,
}

impl DistributionParams {
    /// Create validated parameters
    ///
    /// Both values must be finite and `stdev` strictly positive.
    pub fn new(mean: f32, stdev: f32) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::non_finite("mean"));
        }
        if !stdev.is_finite() {
            return Err(Error::non_finite("standard deviation"));
        }
        if stdev <= 0.0 {
            return Err(Error::non_positive_stdev(stdev));
        }
        Ok(Self { mean, stdev })
    }

    /// Create parameters without validation, for constants
    ///
    /// The caller guarantees `stdev > 0` and both values finite.
    pub const fn new_unchecked(mean: f32, stdev: f32) -> Self {
        Self { mean, stdev }
    }

    pub const fn mean(&self) -> f32 {
        self.mean
    }

    pub const fn stdev(&self) -> f32 {
        self.stdev
    }

    /// Standardised distance of `x` from the mean
    pub fn z_score(&self, x: f32) -> f32 {
        (x - self.mean) / self.stdev
    }
}

impl fmt::Display for DistributionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N(mean={}, stdev={})", self.mean, self.stdev)
    }
}

/// Closed interval `[lower, upper]` a density is integrated over
///
/// Mass outside the limits is dropped. With `around(params, 6.0)` that is
/// about 2e-9 of the total for a normal distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationLimits {
    lower: f32,
    upper: f32,
}

impl IntegrationLimits {
    /// Create validated limits; requires finite values with `lower < upper`
    pub fn new(lower: f32, upper: f32) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(Error::non_finite("integration limits"));
        }
        if lower >= upper {
            return Err(Error::empty_limits(lower, upper));
        }
        Ok(Self { lower, upper })
    }

    /// Limits spanning `sigma_span` standard deviations either side of the mean
    pub const fn around(params: DistributionParams, sigma_span: f32) -> Self {
        let half_width = sigma_span * params.stdev();
        Self {
            lower: params.mean() - half_width,
            upper: params.mean() + half_width,
        }
    }

    pub const fn lower(&self) -> f32 {
        self.lower
    }

    pub const fn upper(&self) -> f32 {
        self.upper
    }

    pub fn width(&self) -> f32 {
        self.upper - self.lower
    }

    /// Whether `x` lies strictly inside the limits
    pub fn contains(&self, x: f32) -> bool {
        x > self.lower && x < self.upper
    }
}

impl fmt::Display for IntegrationLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
