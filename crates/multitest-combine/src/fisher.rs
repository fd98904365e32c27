//! Fisher's method

use crate::common::check_pvalues;
use multitest_core::{distributions::chi_squared_upper_tail, PValueCombination, Result};
use serde::{Deserialize, Serialize};

/// Fisher's combination
///
/// Under the global null `-2 Σ ln pᵢ` follows a χ² distribution with `2k`
/// degrees of freedom; the combined p-value is its upper tail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fisher;

impl Fisher {
    /// Create Fisher's combination
    pub fn new() -> Self {
        Self
    }
}

impl PValueCombination for Fisher {
    fn combine(&self, pvalues: &[f64]) -> Result<f64> {
        check_pvalues(self.name(), pvalues)?;
        if pvalues.iter().any(|&p| p == 0.0) {
            return Ok(0.0);
        }
        let statistic = -2.0 * pvalues.iter().map(|p| p.ln()).sum::<f64>();
        chi_squared_upper_tail(statistic, 2.0 * pvalues.len() as f64)
    }

    fn name(&self) -> &str {
        "Fisher"
    }
}
