//! Distribution functions consumed by the testing procedures
//!
//! Thin wrappers over `statrs` that express every tail probability in the
//! form the procedures need and turn distribution construction failures
//! into `Error::InvalidInput`.

use crate::{Error, Result};
use statrs::distribution::{Beta, ContinuousCDF, Normal, StudentsT};
use statrs::function::gamma::checked_gamma_ur;

/// Normal distribution utilities
pub mod normal {
    use super::*;

    fn standard() -> Normal {
        // mean 0 / sd 1 are always valid parameters
        match Normal::new(0.0, 1.0) {
            Ok(normal) => normal,
            Err(_) => unreachable!("standard normal parameters are valid"),
        }
    }

    /// Upper-tail probability `1 - Φ(z)`, computed as `Φ(-z)`
    pub fn upper_tail(z: f64) -> f64 {
        standard().cdf(-z)
    }

    /// Upper-tail quantile `Φ⁻¹(1 - p)`, computed as `-Φ⁻¹(p)`
    ///
    /// Returns `+∞` for `p = 0` and `-∞` for `p = 1`.
    pub fn upper_quantile(p: f64) -> f64 {
        if p <= 0.0 {
            return f64::INFINITY;
        }
        if p >= 1.0 {
            return f64::NEG_INFINITY;
        }
        -standard().inverse_cdf(p)
    }
}

/// Survival function of the χ² distribution with `df` degrees of freedom
///
/// Evaluated as the regularised upper incomplete gamma `Q(df/2, x/2)` so that
/// very small tail probabilities keep their precision.
pub fn chi_squared_upper_tail(x: f64, df: f64) -> Result<f64> {
    if !(df > 0.0) {
        return Err(Error::invalid_parameter("chi-squared degrees of freedom", df, "(0, inf)"));
    }
    if x <= 0.0 {
        return Ok(1.0);
    }
    if x.is_infinite() {
        return Ok(0.0);
    }
    checked_gamma_ur(df / 2.0, x / 2.0)
        .map_err(|e| Error::InvalidInput(format!("chi-squared survival failed: {e}")))
}

/// Survival function of Student's t with `df` degrees of freedom
pub fn students_t_upper_tail(t: f64, df: f64) -> Result<f64> {
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::InvalidInput(format!("Failed to create t-distribution: {e}")))?;
    // symmetric around zero
    Ok(dist.cdf(-t))
}

/// CDF of the Beta(a, b) distribution
pub fn beta_cdf(x: f64, a: f64, b: f64) -> Result<f64> {
    let dist = Beta::new(a, b)
        .map_err(|e| Error::InvalidInput(format!("Failed to create beta distribution: {e}")))?;
    Ok(dist.cdf(x))
}

/// Harmonic number `1 + 1/2 + ... + 1/n`
pub fn harmonic(n: usize) -> f64 {
    (1..=n).map(|j| 1.0 / j as f64).sum()
}

/// Sample quantile of ascending-sorted data (linear interpolation, "type 7")
///
/// Returns `None` for empty data.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let h = last as f64 * q.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(last);
    Some(sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo]))
}
