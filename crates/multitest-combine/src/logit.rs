//! Logit (Mudholkar-George) combination

use crate::common::check_pvalues;
use multitest_core::{distributions::students_t_upper_tail, Error, PValueCombination, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Logit combination (Mudholkar & George)
///
/// The statistic `-Σ ln(pᵢ / (1 - pᵢ)) / c` with
/// `c = √((5k + 2)·k·π² / (3(5k + 4)))` is approximately Student-t with
/// `5k + 4` degrees of freedom under the global null. A single p-value is
/// returned unchanged. A p-value of 0 forces 0 and a p-value of 1 forces 1;
/// having both is an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logit;

impl Logit {
    /// Create the logit combination
    pub fn new() -> Self {
        Self
    }
}

impl PValueCombination for Logit {
    fn combine(&self, pvalues: &[f64]) -> Result<f64> {
        check_pvalues(self.name(), pvalues)?;
        let k = pvalues.len();
        if k == 1 {
            return Ok(pvalues[0]);
        }

        let has_zero = pvalues.iter().any(|&p| p == 0.0);
        let has_one = pvalues.iter().any(|&p| p == 1.0);
        match (has_zero, has_one) {
            (true, true) => {
                return Err(Error::InvalidInput(
                    "logit combination is undefined with p-values of both 0 and 1".to_string(),
                ))
            }
            (true, false) => return Ok(0.0),
            (false, true) => return Ok(1.0),
            (false, false) => {}
        }

        let kf = k as f64;
        let scale = ((5.0 * kf + 2.0) * kf * PI * PI / (3.0 * (5.0 * kf + 4.0))).sqrt();
        let statistic = -pvalues.iter().map(|&p| (p / (1.0 - p)).ln()).sum::<f64>() / scale;
        students_t_upper_tail(statistic, 5.0 * kf + 4.0)
    }

    fn name(&self) -> &str {
        "Logit"
    }
}
