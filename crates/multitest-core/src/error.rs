//! Error types for multiple testing procedures
//!
//! Provides a unified error type for all multitest crates.

use thiserror::Error;

/// Core error type for multiple testing operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid input data or parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Too few observations to identify the parameters of a fit
    #[error("Insufficient data: expected at least {expected} p-values, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Iterative fit exhausted its iteration budget
    #[error("Fit did not converge after {iterations} iterations (tolerance {tolerance:e})")]
    FitDidNotConverge { iterations: usize, tolerance: f64 },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a p-value outside [0, 1]
    pub fn invalid_pvalue(index: usize, value: f64) -> Self {
        Self::InvalidInput(format!(
            "p-value at index {index} is out of range [0, 1]: {value}"
        ))
    }

    /// Create an error for a strategy parameter outside its domain
    pub fn invalid_parameter(name: &str, value: f64, domain: &str) -> Self {
        Self::InvalidInput(format!("{name} must be in {domain}, got {value}"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for empty input where a result is undefined
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires at least one p-value"))
    }
}
