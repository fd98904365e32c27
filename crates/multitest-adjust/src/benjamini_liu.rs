//! Benjamini-Liu step-down FDR procedure

use crate::ranked::{adjust_ranked, Direction};
use multitest_core::{PValueAdjustment, Result};
use serde::{Deserialize, Serialize};

/// Benjamini-Liu step-down procedure
///
/// With `s = n - i + 1` hypotheses remaining at rank `i`, the raw value is
/// `(1 - (1 - p₍ᵢ₎)ˢ)·s/n`, followed by a running maximum from the smallest
/// p-value up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenjaminiLiu;

impl BenjaminiLiu {
    /// Create a new Benjamini-Liu adjustment
    pub fn new() -> Self {
        Self
    }
}

impl PValueAdjustment for BenjaminiLiu {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        let total = n as f64;
        adjust_ranked(self.name(), pvalues, n, Direction::StepDown, |i, p| {
            let remaining = (n + 1 - i) as f64;
            -(remaining * (-p).ln_1p()).exp_m1() * remaining / total
        })
    }

    fn name(&self) -> &str {
        "Benjamini-Liu"
    }
}
