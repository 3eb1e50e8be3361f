//! Probability density functions the cumulative table can integrate

use crate::math::normal_pdf;
use crate::params::DistributionParams;

/// A probability density over `f32`
///
/// Implementations must be pure: the table builder samples the density once
/// per grid point and assumes repeated calls agree.
pub trait DensityFunction {
    /// Evaluate the density at `x`
    fn density(&self, x: f32) -> f32;
}

impl<F> DensityFunction for F
where
    F: Fn(f32) -> f32,
{
    fn density(&self, x: f32) -> f32 {
        self(x)
    }
}

/// Normal (Gaussian) density with fixed parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalDensity {
    params: DistributionParams,
}

impl NormalDensity {
    /// Create a normal density from validated parameters
    pub const fn new(params: DistributionParams) -> Self {
        Self { params }
    }

    /// The distribution parameters
    pub const fn params(&self) -> DistributionParams {
        self.params
    }

    /// Const counterpart of [`DensityFunction::density`]
    pub const fn eval(&self, x: f32) -> f32 {
        normal_pdf(x, self.params.mean(), self.params.stdev())
    }
}

impl DensityFunction for NormalDensity {
    #[inline]
    fn density(&self, x: f32) -> f32 {
        self.eval(x)
    }
}
