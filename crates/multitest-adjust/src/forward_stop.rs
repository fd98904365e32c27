//! ForwardStop for ordered hypotheses

use crate::ranked::{adjust_ranked, Direction};
use multitest_core::{PValueAdjustment, Result};
use serde::{Deserialize, Serialize};

/// ForwardStop (G'Sell, Wager, Chouldechova & Tibshirani)
///
/// Rank `i` gets the running mean `(1/i)·Σⱼ₌₁ⁱ -ln(1 - p₍ⱼ₎)`, which is
/// already non-decreasing in rank. The total number of tests has no effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardStop;

impl ForwardStop {
    /// Create a new ForwardStop adjustment
    pub fn new() -> Self {
        Self
    }
}

impl PValueAdjustment for ForwardStop {
    fn adjust_n(&self, pvalues: &[f64], n: usize) -> Result<Vec<f64>> {
        let mut running = 0.0;
        adjust_ranked(self.name(), pvalues, n, Direction::StepUp, |i, p| {
            running -= (-p).ln_1p();
            running / i as f64
        })
    }

    fn name(&self) -> &str {
        "ForwardStop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EXPECTED: [f64; 4] = [
        0.0010005003335835344,
        0.005525418093542492,
        0.013836681223931188,
        0.1836643060579347,
    ];

    #[test]
    fn test_forward_stop_reference() {
        let p = [0.001, 0.01, 0.03, 0.5];
        for total in [4, 6] {
            let adj = ForwardStop.adjust_n(&p, total).unwrap();
            for (a, e) in adj.iter().zip(EXPECTED) {
                assert_relative_eq!(*a, e, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_forward_stop_unsorted_input() {
        let adj = ForwardStop.adjust(&[0.5, 0.03, 0.001, 0.01]).unwrap();
        assert_relative_eq!(adj[0], EXPECTED[3], max_relative = 1e-12);
        assert_relative_eq!(adj[2], EXPECTED[0], max_relative = 1e-12);
    }

    #[test]
    fn test_forward_stop_p_one_clips() {
        let adj = ForwardStop.adjust(&[0.2, 1.0]).unwrap();
        assert_eq!(adj[1], 1.0);
        assert!(adj[0] < 1.0);
    }
}
