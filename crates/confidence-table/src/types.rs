//! Core types for cumulative table representation

use confidence_core::IntegrationLimits;
use num_traits::ToPrimitive;
use std::fmt;

/// Discretised cumulative distribution over fixed integration limits
///
/// `values()[i]` approximates the integral of the density from `lower` to
/// `lower + i * delta`. The first value is always `0`, values never decrease,
/// and the last one is the total mass inside the limits.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeTable {
    limits: IntegrationLimits,
    delta: f32,
    cdf: Vec<f32>,
}

impl CumulativeTable {
    /// Assemble a table from already integrated values
    ///
    /// `cdf` must hold `resolution + 1` values sampled `delta` apart.
    pub(crate) fn from_parts(limits: IntegrationLimits, delta: f32, cdf: Vec<f32>) -> Self {
        debug_assert!(cdf.len() >= 2, "a table needs at least one step");
        Self { limits, delta, cdf }
    }

    pub fn limits(&self) -> IntegrationLimits {
        self.limits
    }

    pub fn lower(&self) -> f32 {
        self.limits.lower()
    }

    pub fn upper(&self) -> f32 {
        self.limits.upper()
    }

    /// Width of one integration step
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Number of integration steps `N`
    pub fn resolution(&self) -> usize {
        self.cdf.len() - 1
    }

    /// Number of stored values, `N + 1`
    pub fn len(&self) -> usize {
        self.cdf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cdf.is_empty()
    }

    pub fn values(&self) -> &[f32] {
        &self.cdf
    }

    pub fn get(&self, index: usize) -> Option<f32> {
        self.cdf.get(index).copied()
    }

    /// Probability mass captured between the limits
    pub fn total_mass(&self) -> f32 {
        self.cdf.last().copied().unwrap_or(0.0)
    }

    /// Index of the step containing `x`, or `None` outside the open interval
    /// `(lower, upper)` and for NaN.
    pub fn bucket(&self, x: f32) -> Option<usize> {
        if !self.limits.contains(x) {
            return None;
        }
        let index = ((x - self.lower()) / self.delta).to_usize()?;
        Some(index.min(self.resolution()))
    }

    /// Cumulative probability at the start of the step containing `x`
    pub fn cdf_at(&self, x: f32) -> Option<f32> {
        self.bucket(x).map(|i| self.cdf[i])
    }
}

impl fmt::Display for CumulativeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CumulativeTable({} steps over {}, delta={:.3e}, mass={:.6})",
            self.resolution(),
            self.limits,
            self.delta,
            self.total_mass()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn quarter_table() -> CumulativeTable {
        let limits = IntegrationLimits::new(-1.0, 1.0).unwrap();
        CumulativeTable::from_parts(limits, 0.5, vec![0.0, 0.125, 0.5, 0.875, 1.0])
    }

    #[test]
    fn test_accessors() {
        let table = quarter_table();
        assert_eq!(table.resolution(), 4);
        assert_eq!(table.len(), 5);
        assert!(!table.is_empty());
        assert_eq!(table.lower(), -1.0);
        assert_eq!(table.upper(), 1.0);
        assert_eq!(table.delta(), 0.5);
        assert_eq!(table.get(1), Some(0.125));
        assert_eq!(table.get(5), None);
        assert_eq!(table.total_mass(), 1.0);
    }

    #[test]
    fn test_bucket() {
        let table = quarter_table();
        assert_eq!(table.bucket(-0.9), Some(0));
        assert_eq!(table.bucket(0.0), Some(2));
        assert_eq!(table.bucket(0.99), Some(3));
        assert_eq!(table.bucket(-1.0), None);
        assert_eq!(table.bucket(1.0), None);
        assert_eq!(table.bucket(-7.0), None);
        assert_eq!(table.bucket(f32::NAN), None);
    }

    #[test]
    fn test_cdf_at() {
        let table = quarter_table();
        assert_eq!(table.cdf_at(0.1), Some(0.5));
        assert_eq!(table.cdf_at(0.6), Some(0.875));
        assert_eq!(table.cdf_at(2.0), None);
    }

    #[test]
    fn test_display() {
        let display = quarter_table().to_string();
        assert!(display.contains("4 steps"));
        assert!(display.contains("[-1, 1]"));
        assert!(display.contains("mass=1.000000"));
    }

    proptest! {
        #[test]
        fn prop_bucket_contains_observation(x in -0.999f32..0.999) {
            let table = quarter_table();
            let i = table.bucket(x).unwrap();
            let left = table.lower() + table.delta() * i as f32;
            prop_assert!(left <= x + 1e-6, "x = {} below bucket {} starting at {}", x, i, left);
            prop_assert!(x < left + table.delta() + 1e-6, "x = {} beyond bucket {}", x, i);
        }
    }
}
