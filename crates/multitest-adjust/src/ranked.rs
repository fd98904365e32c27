//! Shared driver for rank-based adjustments

use multitest_core::{
    clip_unit_all, step_down, step_up, validate_pvalues, validate_total, RankOrder, Result,
};
use tracing::trace;

/// How raw per-rank values are made monotone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Running minimum from the largest rank down
    StepUp,
    /// Running maximum from rank 1 up
    StepDown,
    /// Values are used as computed
    Elementwise,
}

/// Validate, rank, compute `raw(rank, p)` for every observed p-value, correct
/// in the given direction, clip and restore input order
///
/// `rank` is 1-based and `raw` is called in ascending rank order. The
/// unobserved `n - k` tests rank after every observed p-value, so the
/// corrections on the observed ranks are unaffected by them once values are
/// clipped to 1.
pub(crate) fn adjust_ranked<F>(
    method: &str,
    pvalues: &[f64],
    n: usize,
    direction: Direction,
    mut raw: F,
) -> Result<Vec<f64>>
where
    F: FnMut(usize, f64) -> f64,
{
    validate_pvalues(pvalues)?;
    validate_total(pvalues.len(), n)?;
    trace!(method, k = pvalues.len(), n, "adjusting p-values");

    let order = RankOrder::ascending(pvalues);
    let mut by_rank: Vec<f64> = order
        .sorted(pvalues)
        .into_iter()
        .enumerate()
        .map(|(i, p)| raw(i + 1, p))
        .collect();

    match direction {
        Direction::StepUp => step_up(&mut by_rank),
        Direction::StepDown => step_down(&mut by_rank),
        Direction::Elementwise => {}
    }
    clip_unit_all(&mut by_rank);

    Ok(order.restore(&by_rank))
}
