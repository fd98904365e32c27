//! Settings shared by the iterative fits

use multitest_core::{Error, Result};

/// Default convergence tolerance of the iterative fits
pub const DEFAULT_XTOL: f64 = 1e-6;

/// Default iteration cap of the iterative fits
pub const DEFAULT_MAX_ITER: usize = 10_000;

pub(crate) fn check_fit_settings(xtol: f64, max_iter: usize) -> Result<()> {
    if !(xtol > 0.0 && xtol.is_finite()) {
        return Err(Error::invalid_parameter("xtol", xtol, "(0, inf)"));
    }
    if max_iter == 0 {
        return Err(Error::InvalidInput("max_iter must be positive".to_string()));
    }
    Ok(())
}

pub(crate) fn check_sample_size(pvalues: &[f64], expected: usize) -> Result<()> {
    if pvalues.len() < expected {
        return Err(Error::InsufficientData {
            expected,
            actual: pvalues.len(),
        });
    }
    Ok(())
}

/// Whether every p-value equals the first one
pub(crate) fn all_identical(pvalues: &[f64]) -> bool {
    pvalues.windows(2).all(|w| w[0] == w[1])
}
