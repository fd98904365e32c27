//! Hommel's closed-testing procedure based on Simes tests

use multitest_core::{
    clip_unit_all, validate_pvalues, validate_total, PValueAdjustment, RankOrder, Result,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Hommel's procedure
///
/// Adjusted p-values of the closed test built from Simes intersection tests.
/// For every subset size `m = n - 1, ..., 2` the Simes critical value of the
/// `m - 1` largest ranks bounds the adjusted values of the remaining ranks;
/// the adjusted p-value is the largest bound seen over all subset sizes.
/// Unobserved tests (`n > k`) enter the recursion as p-values of 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hommel;

impl Hommel {
    /// Create a new Hommel correction
    pub fn new() -> Self {
        Self
    }
}

impl PValueAdjustment for Hommel {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        validate_pvalues(pvalues)?;
        validate_total(pvalues.len(), n)?;
        trace!(method = self.name(), k = pvalues.len(), n, "adjusting p-values");

        if pvalues.is_empty() {
            return Ok(Vec::new());
        }

        let mut padded = pvalues.to_vec();
        padded.resize(n, 1.0);
        let order = RankOrder::ascending(&padded);
        let sorted = order.sorted(&padded);

        let mut by_rank = hommel_sorted(&sorted);
        clip_unit_all(&mut by_rank);

        let mut adjusted = order.restore(&by_rank);
        adjusted.truncate(pvalues.len());
        Ok(adjusted)
    }

    fn name(&self) -> &str {
        "Hommel"
    }
}

/// Hommel adjustment of ascending p-values, indexed by rank
fn hommel_sorted(sorted: &[f64]) -> Vec<f64> {
    let n = sorted.len();
    let simes = sorted
        .iter()
        .enumerate()
        .map(|(i, &p)| n as f64 * p / (i + 1) as f64)
        .fold(f64::INFINITY, f64::min);

    let mut adjusted = vec![simes; n];
    let mut bound = vec![simes; n];
    for m in (2..n).rev() {
        let mf = m as f64;
        // Simes value over the m - 1 largest ranks
        let tail_start = n - m + 1;
        let tail_simes = sorted[tail_start..]
            .iter()
            .enumerate()
            .map(|(j, &p)| mf * p / (j + 2) as f64)
            .fold(f64::INFINITY, f64::min);

        for i in 0..tail_start {
            bound[i] = (mf * sorted[i]).min(tail_simes);
        }
        let pivot = bound[tail_start - 1];
        for slot in &mut bound[tail_start..] {
            *slot = pivot;
        }
        for (a, &b) in adjusted.iter_mut().zip(&bound) {
            *a = a.max(b);
        }
    }

    for (a, &p) in adjusted.iter_mut().zip(sorted) {
        *a = a.max(p);
    }
    adjusted
}
