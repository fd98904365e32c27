//! Known proportion of true nulls

use crate::{validate_pvalues, Error, Pi0Estimator, Result};
use serde::{Deserialize, Serialize};

/// Returns a known π₀ regardless of the data
///
/// Useful in simulations and to plug a known π₀ into adaptive procedures.
/// The value is checked against [0, 1] when an estimate is requested.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Oracle {
    pi0: f64,
}

impl Oracle {
    /// Create an oracle for the given π₀
    pub fn new(pi0: f64) -> Self {
        Self { pi0 }
    }

    /// The configured π₀
    pub fn pi0(&self) -> f64 {
        self.pi0
    }
}

impl Default for Oracle {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Pi0Estimator for Oracle {
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64> {
        if !(0.0..=1.0).contains(&self.pi0) {
            return Err(Error::invalid_parameter("oracle pi0", self.pi0, "[0, 1]"));
        }
        validate_pvalues(pvalues)?;
        Ok(self.pi0)
    }

    fn name(&self) -> &str {
        "Oracle"
    }
}
