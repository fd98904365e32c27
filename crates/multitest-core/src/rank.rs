//! Stable rank ordering of p-values
//!
//! Every stepwise procedure works on the ascending order statistics and must
//! hand its result back in the caller's order. `RankOrder` keeps both
//! directions of that permutation.

use ordered_float::OrderedFloat;

/// Ascending order of a slice together with its inverse permutation
///
/// Ties keep their original relative order.
///
/// # Examples
///
/// ```rust
/// use multitest_core::RankOrder;
///
/// let pvals = [0.3, 0.01, 0.3, 0.2];
/// let order = RankOrder::ascending(&pvals);
/// assert_eq!(order.indices(), &[1, 3, 0, 2]);
/// assert_eq!(order.sorted(&pvals), vec![0.01, 0.2, 0.3, 0.3]);
///
/// let ranked = vec![1.0, 2.0, 3.0, 4.0];
/// assert_eq!(order.restore(&ranked), vec![3.0, 1.0, 4.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankOrder {
    /// `indices[r]` is the input position holding rank `r` (0-based)
    indices: Vec<usize>,
    /// `ranks[i]` is the rank (0-based) of input position `i`
    ranks: Vec<usize>,
}

impl RankOrder {
    /// Compute the stable ascending order of `values`
    pub fn ascending(values: &[f64]) -> Self {
        let mut indices: Vec<usize> = (0..values.len()).collect();
        // sort_by_key is stable, so equal p-values keep input order
        indices.sort_by_key(|&i| OrderedFloat(values[i]));

        let mut ranks = vec![0; values.len()];
        for (rank, &index) in indices.iter().enumerate() {
            ranks[index] = rank;
        }

        Self { indices, ranks }
    }

    /// Number of ranked values
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether nothing was ranked
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Input positions in ascending order of value
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// 0-based rank of every input position
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Gather `values` into ascending order
    pub fn sorted(&self, values: &[f64]) -> Vec<f64> {
        self.indices.iter().map(|&i| values[i]).collect()
    }

    /// Scatter rank-indexed values back into input order
    ///
    /// `by_rank` may be longer than the ranked input (padded k-of-n
    /// procedures); only the first `len()` ranks are addressed.
    pub fn restore(&self, by_rank: &[f64]) -> Vec<f64> {
        self.ranks.iter().map(|&r| by_rank[r]).collect()
    }
}
