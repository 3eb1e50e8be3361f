//! Naive reference integration
//!
//! Textbook cumulative trapezoidal rule accumulated in `f64`, one trapezoid
//! per step. It samples the density on exactly the same `f32` grid as
//! [`TrapezoidalBuilder`](crate::TrapezoidalBuilder), so any difference
//! between the two is accumulation error only.
//!
//! For testing and verification, not for building production tables.

use confidence_core::{DensityFunction, IntegrationLimits};

/// `cdf[i] = cdf[i - 1] + delta * (f_{i-1} + f_i) / 2`, with `cdf[0] = 0`
pub fn cumulative_trapezoid<D>(density: &D, limits: IntegrationLimits, resolution: usize) -> Vec<f64>
where
    D: DensityFunction + ?Sized,
{
    let resolution = resolution.max(1);
    let lower = limits.lower();
    let delta = limits.width() / resolution as f32;

    let mut cdf = Vec::with_capacity(resolution + 1);
    cdf.push(0.0);

    let mut previous = density.density(lower) as f64;
    let mut total = 0.0f64;
    for i in 1..=resolution {
        let current = density.density(lower + delta * i as f32) as f64;
        total += delta as f64 * (previous + current) / 2.0;
        cdf.push(total);
        previous = current;
    }
    cdf
}
