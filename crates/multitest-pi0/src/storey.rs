//! Storey's tail-proportion estimator and its grid-based refinements

use multitest_core::{
    distributions::quantile_sorted, validate_pvalues, Error, Pi0Estimator, Result,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default tuning parameter of [`Storey`]
pub const DEFAULT_LAMBDA: f64 = 0.1;

/// Default quantile of [`StoreyBootstrap`]
pub const DEFAULT_QUANTILE: f64 = 0.1;

fn count_at_least(pvalues: &[f64], lambda: f64) -> usize {
    pvalues.iter().filter(|&&p| p >= lambda).count()
}

/// `#{p ≥ λ} / ((1 - λ)·k)` without clipping; 1 for an empty sample
fn tail_proportion(pvalues: &[f64], lambda: f64) -> f64 {
    if pvalues.is_empty() {
        return 1.0;
    }
    count_at_least(pvalues, lambda) as f64 / ((1.0 - lambda) * pvalues.len() as f64)
}

fn check_lambda(lambda: f64) -> Result<()> {
    if !(0.0..1.0).contains(&lambda) {
        return Err(Error::invalid_parameter("lambda", lambda, "[0, 1)"));
    }
    Ok(())
}

fn check_grid(grid: &[f64]) -> Result<()> {
    if grid.is_empty() {
        return Err(Error::InvalidInput("lambda grid must not be empty".to_string()));
    }
    grid.iter().try_for_each(|&lambda| check_lambda(lambda))
}

/// Storey's estimator
///
/// P-values above `λ` are assumed to come mostly from true nulls, which are
/// uniform, so `π̂₀ = #{p ≥ λ} / ((1 - λ)·k)`, capped at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Storey {
    lambda: f64,
}

impl Storey {
    /// Create the estimator with the default `λ`
    pub fn new() -> Self {
        Self {
            lambda: DEFAULT_LAMBDA,
        }
    }

    /// Set the tuning parameter `λ ∈ [0, 1)`
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// The tuning parameter
    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Default for Storey {
    fn default() -> Self {
        Self::new()
    }
}

impl Pi0Estimator for Storey {
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64> {
        check_lambda(self.lambda)?;
        validate_pvalues(pvalues)?;
        Ok(tail_proportion(pvalues, self.lambda).min(1.0))
    }

    fn name(&self) -> &str {
        "Storey"
    }
}

/// Storey's estimator with `λ` chosen by bootstrap mean squared error
///
/// Uses the closed form of the bootstrap MSE (Robinson): with
/// `wⱼ = #{p ≥ λⱼ}` and `π̂ⱼ` the Storey estimate at `λⱼ`,
///
/// ```text
/// MSEⱼ = wⱼ (1 - wⱼ/k) / (k² (1 - λⱼ)²) + (π̂ⱼ - m)²
/// ```
///
/// where `m` is the `q`-quantile of the `π̂ⱼ`. The estimate at the first
/// minimal MSE is returned, capped at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreyBootstrap {
    lambdas: Vec<f64>,
    quantile: f64,
}

impl StoreyBootstrap {
    /// Create the estimator with `λ = 0.05, 0.10, ..., 0.95` and `q = 0.1`
    pub fn new() -> Self {
        Self {
            lambdas: (1..20).map(|j| j as f64 / 20.0).collect(),
            quantile: DEFAULT_QUANTILE,
        }
    }

    /// Set the `λ` grid
    pub fn with_lambdas(mut self, lambdas: Vec<f64>) -> Self {
        self.lambdas = lambdas;
        self
    }

    /// Set the quantile `q ∈ [0, 1]` used as the bootstrap target
    pub fn with_quantile(mut self, quantile: f64) -> Self {
        self.quantile = quantile;
        self
    }

    /// The `λ` grid
    pub fn lambdas(&self) -> &[f64] {
        &self.lambdas
    }

    /// The target quantile
    pub fn quantile(&self) -> f64 {
        self.quantile
    }
}

impl Default for StoreyBootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Pi0Estimator for StoreyBootstrap {
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64> {
        check_grid(&self.lambdas)?;
        if !(0.0..=1.0).contains(&self.quantile) {
            return Err(Error::invalid_parameter("quantile", self.quantile, "[0, 1]"));
        }
        validate_pvalues(pvalues)?;
        if pvalues.is_empty() {
            return Ok(1.0);
        }

        let k = pvalues.len() as f64;
        let counts: Vec<f64> = self
            .lambdas
            .iter()
            .map(|&lambda| count_at_least(pvalues, lambda) as f64)
            .collect();
        let estimates: Vec<f64> = self
            .lambdas
            .iter()
            .zip(&counts)
            .map(|(&lambda, &w)| w / ((1.0 - lambda) * k))
            .collect();

        let mut sorted = estimates.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let target = quantile_sorted(&sorted, self.quantile).unwrap_or(1.0);

        let mut best = (f64::INFINITY, 1.0);
        for ((&lambda, &w), &estimate) in self.lambdas.iter().zip(&counts).zip(&estimates) {
            let variance = w * (1.0 - w / k) / (k * k * (1.0 - lambda).powi(2));
            let mse = variance + (estimate - target).powi(2);
            if mse < best.0 {
                best = (mse, estimate);
            }
        }
        debug!(target, mse = best.0, pi0 = best.1, "bootstrap lambda selection");

        Ok(best.1.min(1.0))
    }

    fn name(&self) -> &str {
        "Storey bootstrap"
    }
}

/// Right-boundary procedure (Liang & Nettleton)
///
/// Storey estimates are computed along an increasing `λ` grid. The estimate
/// returned is the first one that does not decrease relative to its
/// predecessor, i.e. the right boundary of the flat part of the p-value
/// histogram; if the estimates decrease throughout, the last one is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RightBoundary {
    lambdas: Vec<f64>,
}

impl RightBoundary {
    /// Create the estimator with the grid `0.02, 0.04, ..., 0.10, 0.15, 0.20, ..., 0.95`
    pub fn new() -> Self {
        let fine = (1..=5).map(|j| j as f64 / 50.0);
        let coarse = (3..20).map(|j| j as f64 / 20.0);
        Self {
            lambdas: fine.chain(coarse).collect(),
        }
    }

    /// Set the `λ` grid; it is sorted before use
    pub fn with_lambdas(mut self, lambdas: Vec<f64>) -> Self {
        self.lambdas = lambdas;
        self
    }

    /// The `λ` grid
    pub fn lambdas(&self) -> &[f64] {
        &self.lambdas
    }
}

impl Default for RightBoundary {
    fn default() -> Self {
        Self::new()
    }
}

impl Pi0Estimator for RightBoundary {
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64> {
        check_grid(&self.lambdas)?;
        validate_pvalues(pvalues)?;
        if pvalues.is_empty() {
            return Ok(1.0);
        }

        let mut grid = self.lambdas.clone();
        grid.sort_by(|a, b| a.total_cmp(b));
        let estimates: Vec<f64> = grid
            .iter()
            .map(|&lambda| tail_proportion(pvalues, lambda))
            .collect();

        let chosen = estimates
            .windows(2)
            .position(|w| w[1] >= w[0])
            .map_or(estimates.len() - 1, |i| i + 1);
        debug!(lambda = grid[chosen], pi0 = estimates[chosen], "right boundary");

        Ok(estimates[chosen].min(1.0))
    }

    fn name(&self) -> &str {
        "Right boundary"
    }
}
