//! Bonferroni and Šidák single-step corrections

use crate::ranked::{adjust_ranked, Direction};
use multitest_core::{PValueAdjustment, Result};
use serde::{Deserialize, Serialize};

/// Bonferroni correction, `p̃ᵢ = min(1, n·pᵢ)`
///
/// Controls the family-wise error rate under arbitrary dependence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonferroni;

impl Bonferroni {
    /// Create a new Bonferroni correction
    pub fn new() -> Self {
        Self
    }
}

impl PValueAdjustment for Bonferroni {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        let scale = n as f64;
        adjust_ranked(self.name(), pvalues, n, Direction::Elementwise, |_, p| p * scale)
    }

    fn name(&self) -> &str {
        "Bonferroni"
    }
}

/// Šidák correction, `p̃ᵢ = 1 - (1 - pᵢ)ⁿ`
///
/// Exact family-wise error control for independent tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sidak;

impl Sidak {
    /// Create a new Šidák correction
    pub fn new() -> Self {
        Self
    }
}

impl PValueAdjustment for Sidak {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        let exponent = n as f64;
        adjust_ranked(self.name(), pvalues, n, Direction::Elementwise, |_, p| {
            // 1 - (1 - p)^n without cancellation for small p
            -(exponent * (-p).ln_1p()).exp_m1()
        })
    }

    fn name(&self) -> &str {
        "Sidak"
    }
}
