//! Barber-Candès knockoff-style FDR estimate

use multitest_core::{
    clip_unit_all, step_up, validate_pvalues, validate_total, PValueAdjustment, RankOrder, Result,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Barber-Candès adjustment
///
/// P-values above ½ act as mirror-image estimates of the number of false
/// discoveries below ½. At a threshold `t < ½`
///
/// ```text
/// FDP(t) = (1 + #{j : pⱼ ≥ 1 - t}) / max(1, #{j : pⱼ ≤ t})
/// ```
///
/// and each p-value below ½ is adjusted to the smallest `FDP(t)` over the
/// observed thresholds `t ≥ pᵢ`. P-values of ½ or more are adjusted to 1, as
/// is everything when there is at most one test. Unobserved tests count as
/// p-values of 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarberCandes;

impl BarberCandes {
    /// Create a new Barber-Candès adjustment
    pub fn new() -> Self {
        Self
    }
}

impl PValueAdjustment for BarberCandes {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        validate_pvalues(pvalues)?;
        validate_total(pvalues.len(), n)?;
        trace!(method = self.name(), k = pvalues.len(), n, "adjusting p-values");

        if n <= 1 {
            return Ok(vec![1.0; pvalues.len()]);
        }

        let order = RankOrder::ascending(pvalues);
        let sorted = order.sorted(pvalues);
        let unobserved = (n - pvalues.len()) as f64;

        let mut by_rank: Vec<f64> = sorted
            .iter()
            .map(|&t| {
                if t >= 0.5 {
                    return 1.0;
                }
                let mirrored = sorted.len() - sorted.partition_point(|&p| p < 1.0 - t);
                let discoveries = sorted.partition_point(|&p| p <= t).max(1);
                (1.0 + mirrored as f64 + unobserved) / discoveries as f64
            })
            .collect();
        clip_unit_all(&mut by_rank);
        step_up(&mut by_rank);

        Ok(order.restore(&by_rank))
    }

    fn name(&self) -> &str {
        "Barber-Candes"
    }
}
