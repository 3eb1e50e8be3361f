//! Error types for the confidence metric
//!
//! The numeric core is total; errors only come from validating
//! configuration and from the I/O surface around it.

use thiserror::Error;

/// Core error type for confidence metric operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a constructor
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (reading observations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a standard deviation that is not strictly positive
    pub fn non_positive_stdev(stdev: f32) -> Self {
        Self::InvalidParameter(format!("Standard deviation {stdev} must be > 0"))
    }

    /// Create an error for integration limits that do not enclose any mass
    pub fn empty_limits(lower: f32, upper: f32) -> Self {
        Self::InvalidParameter(format!(
            "Integration limits [{lower}, {upper}] are empty: lower must be < upper"
        ))
    }

    /// Create an error for a table without any steps
    pub fn zero_resolution() -> Self {
        Self::InvalidParameter("Resolution must be at least 1".to_string())
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}
