//! Minimum of adjusted p-values

use crate::common::check_pvalues;
use multitest_core::{PValueAdjustment, PValueCombination, Result};
use serde::{Deserialize, Serialize};

/// Smallest p-value after a multiplicity adjustment
///
/// With Benjamini-Hochberg this is Simes' combination, with Bonferroni it is
/// `min(1, k·min p)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinimumCombination<A> {
    adjustment: A,
}

impl<A: PValueAdjustment> MinimumCombination<A> {
    /// Combine through `adjustment`
    pub fn new(adjustment: A) -> Self {
        Self { adjustment }
    }

    /// The adjustment in use
    pub fn adjustment(&self) -> &A {
        &self.adjustment
    }
}

impl<A: PValueAdjustment> PValueCombination for MinimumCombination<A> {
    fn combine(&self, pvalues: &[f64]) -> Result<f64> {
        check_pvalues(self.name(), pvalues)?;
        let adjusted = self.adjustment.adjust(pvalues)?;
        Ok(adjusted.into_iter().fold(f64::INFINITY, f64::min))
    }

    fn name(&self) -> &str {
        "Minimum"
    }
}
