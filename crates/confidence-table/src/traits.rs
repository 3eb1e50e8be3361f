//! Core traits for table building

use crate::types::CumulativeTable;
use confidence_core::{DensityFunction, IntegrationLimits};

/// Strategy for integrating a density into a [`CumulativeTable`]
pub trait TableBuilder {
    /// Integrate `density` over `limits`
    fn build<D>(&self, density: &D, limits: IntegrationLimits) -> CumulativeTable
    where
        D: DensityFunction + ?Sized;

    /// Number of integration steps the builder produces
    fn resolution(&self) -> usize;
}
