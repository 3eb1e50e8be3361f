//! Table building strategies

use crate::traits::TableBuilder;
use crate::types::CumulativeTable;
use confidence_core::{DensityFunction, IntegrationLimits};
use tracing::{debug, instrument, warn};

/// Deviation of the total mass from 1 above which a built table is reported
pub const MASS_TOLERANCE: f32 = 0.01;

/// Trapezoidal-rule table builder
///
/// Samples the density at `N + 1` evenly spaced points and keeps a running
/// sum of the samples, so every cumulative value costs O(1):
///
/// ```text
/// s      = f_0 / 2
/// cdf[i] = delta * (s + f_i / 2)
/// s     += f_i
/// ```
///
/// which is the composite trapezoidal rule over `[lower, lower + i * delta]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrapezoidalBuilder {
    resolution: usize,
}

impl TrapezoidalBuilder {
    /// Create a builder with `resolution` integration steps (at least one)
    pub fn new(resolution: usize) -> Self {
        Self {
            resolution: resolution.max(1),
        }
    }
}

impl TableBuilder for TrapezoidalBuilder {
    #[instrument(skip_all, fields(resolution = self.resolution, limits = %limits))]
    fn build<D>(&self, density: &D, limits: IntegrationLimits) -> CumulativeTable
    where
        D: DensityFunction + ?Sized,
    {
        let lower = limits.lower();
        let delta = limits.width() / self.resolution as f32;

        let mut cdf = Vec::with_capacity(self.resolution + 1);
        cdf.push(0.0);

        let mut sum = density.density(lower) / 2.0;
        for i in 1..=self.resolution {
            let f_i = density.density(lower + delta * i as f32);
            cdf.push(delta * (sum + f_i / 2.0));
            sum += f_i;
        }

        let table = CumulativeTable::from_parts(limits, delta, cdf);
        let mass = table.total_mass();
        debug!(delta, mass, "built cumulative table");
        if (mass - 1.0).abs() > MASS_TOLERANCE {
            warn!(mass, "cumulative table does not capture the full probability mass");
        }
        table
    }

    fn resolution(&self) -> usize {
        self.resolution
    }
}
