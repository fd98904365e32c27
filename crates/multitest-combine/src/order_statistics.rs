//! Combinations based on order statistics: Tippett, Simes and Wilkinson

use crate::common::check_pvalues;
use multitest_core::{
    clip_unit, distributions::beta_cdf, Error, PValueCombination, RankOrder, Result,
};
use serde::{Deserialize, Serialize};

/// Tippett's minimum-p combination, `1 - (1 - min p)^k`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tippett;

impl Tippett {
    /// Create Tippett's combination
    pub fn new() -> Self {
        Self
    }
}

impl PValueCombination for Tippett {
    fn combine(&self, pvalues: &[f64]) -> Result<f64> {
        check_pvalues(self.name(), pvalues)?;
        let minimum = pvalues.iter().copied().fold(f64::INFINITY, f64::min);
        let k = pvalues.len() as f64;
        Ok(-(k * (-minimum).ln_1p()).exp_m1())
    }

    fn name(&self) -> &str {
        "Tippett"
    }
}

/// Simes' combination, `min_i k·p₍ᵢ₎ / i`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simes;

impl Simes {
    /// Create Simes' combination
    pub fn new() -> Self {
        Self
    }
}

impl PValueCombination for Simes {
    fn combine(&self, pvalues: &[f64]) -> Result<f64> {
        check_pvalues(self.name(), pvalues)?;
        let k = pvalues.len() as f64;
        let minimum = RankOrder::ascending(pvalues)
            .sorted(pvalues)
            .into_iter()
            .enumerate()
            .map(|(i, p)| k * p / (i + 1) as f64)
            .fold(f64::INFINITY, f64::min);
        Ok(clip_unit(minimum))
    }

    fn name(&self) -> &str {
        "Simes"
    }
}

/// Wilkinson's combination
///
/// The `r`-th smallest of `k` uniform p-values is Beta(r, k - r + 1); the
/// combined p-value is that CDF at `p₍ᵣ₎`. Rank 1 is Tippett's combination
/// and rank `k` gives `p₍ₖ₎ᵏ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wilkinson {
    rank: usize,
}

impl Wilkinson {
    /// Use the `rank`-th smallest p-value (1-based)
    pub fn new(rank: usize) -> Self {
        Self { rank }
    }

    /// The order statistic used
    pub fn rank(&self) -> usize {
        self.rank
    }
}

impl Default for Wilkinson {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PValueCombination for Wilkinson {
    fn combine(&self, pvalues: &[f64]) -> Result<f64> {
        check_pvalues(self.name(), pvalues)?;
        let k = pvalues.len();
        if self.rank == 0 || self.rank > k {
            return Err(Error::InvalidInput(format!(
                "Wilkinson rank must be in [1, {k}], got {}",
                self.rank
            )));
        }
        let sorted = RankOrder::ascending(pvalues).sorted(pvalues);
        beta_cdf(
            sorted[self.rank - 1],
            self.rank as f64,
            (k - self.rank + 1) as f64,
        )
    }

    fn name(&self) -> &str {
        "Wilkinson"
    }
}
