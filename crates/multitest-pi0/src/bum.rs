//! Beta-uniform mixture (BUM) estimators fitted by EM

use crate::fitting::{
    all_identical, check_fit_settings, check_sample_size, DEFAULT_MAX_ITER, DEFAULT_XTOL,
};
use crate::BetaUniformMixtureModel;
use multitest_core::{validate_pvalues, Error, Pi0Estimator, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Default starting weight of the uniform component
pub const DEFAULT_START_GAMMA: f64 = 0.5;

/// Default starting shape of the Beta component
pub const DEFAULT_START_ALPHA: f64 = 0.5;

/// Default censoring bound of [`CensoredBum`]
pub const DEFAULT_CENSORING: f64 = 0.05;

/// Fewest p-values a BUM fit accepts
const MIN_SAMPLE: usize = 3;

/// Fitted density `f(p) = γ + (1 - γ)·α·p^(α-1)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BumFit {
    /// Weight of the uniform component
    pub gamma: f64,
    /// Shape of the Beta(α, 1) component
    pub alpha: f64,
    /// EM iterations used
    pub iterations: usize,
}

/// `γ + (1 - γ)·α`, clipped to [0, 1]
fn upper_bound(gamma: f64, alpha: f64) -> f64 {
    (gamma + (1.0 - gamma) * alpha).clamp(0.0, 1.0)
}

impl BumFit {
    /// π₀ as the fitted density at `p = 1`, `γ + (1 - γ)·α`, clipped to [0, 1]
    pub fn pi0(&self) -> f64 {
        upper_bound(self.gamma, self.alpha)
    }

    /// Fitted density at `p`
    pub fn density(&self, p: f64) -> f64 {
        self.gamma + (1.0 - self.gamma) * self.alpha * p.powf(self.alpha - 1.0)
    }

    /// The fit as a mixture of a uniform and a Beta(α, 1) component
    pub fn model(&self) -> Result<BetaUniformMixtureModel> {
        BetaUniformMixtureModel::new(self.gamma, self.alpha, 1.0)
    }

    /// Fit used when every p-value is the same: the uniform density
    fn uniform() -> Self {
        Self {
            gamma: 1.0,
            alpha: 1.0,
            iterations: 0,
        }
    }
}

/// One EM update; `censored` p-values below `bound` enter only through
/// `F(bound)`
struct EmStep<'a> {
    logs: &'a [f64],
    censored: usize,
    bound: Option<f64>,
}

impl EmStep<'_> {
    fn update(&self, gamma: f64, alpha: f64) -> (f64, f64) {
        let k = (self.logs.len() + self.censored) as f64;
        let mut z_sum = 0.0;
        let mut w_sum = 0.0;
        let mut w_log_sum = 0.0;
        for &log_p in self.logs {
            let beta_part = (1.0 - gamma) * alpha * ((alpha - 1.0) * log_p).exp();
            let z = gamma / (gamma + beta_part);
            z_sum += z;
            w_sum += 1.0 - z;
            w_log_sum += (1.0 - z) * log_p;
        }

        if let Some(bound) = self.bound {
            let censored = self.censored as f64;
            let mass = gamma * bound + (1.0 - gamma) * bound.powf(alpha);
            let z = gamma * bound / mass;
            z_sum += censored * z;
            let w = censored * (1.0 - z);
            w_sum += w;
            // Censored Beta mass is λ^α, so each one adds ln λ to the score
            w_log_sum += w * bound.ln();
        }

        (z_sum / k, -w_sum / w_log_sum)
    }
}

fn run_em(
    step: &EmStep<'_>,
    start: (f64, f64),
    xtol: f64,
    max_iter: usize,
) -> Result<BumFit> {
    let (mut gamma, mut alpha) = start;
    for iteration in 1..=max_iter {
        let (next_gamma, next_alpha) = step.update(gamma, alpha);
        if !(next_alpha.is_finite() && next_alpha > 0.0 && next_gamma.is_finite()) {
            warn!(iteration, gamma, alpha, "BUM fit left the parameter space");
            return Err(Error::FitDidNotConverge {
                iterations: iteration,
                tolerance: xtol,
            });
        }
        // γ and α are not separately identified on null data, π₀ is
        let change = (upper_bound(next_gamma, next_alpha) - upper_bound(gamma, alpha)).abs();
        gamma = next_gamma;
        alpha = next_alpha;
        if change <= xtol {
            debug!(iterations = iteration, gamma, alpha, "BUM fit converged");
            return Ok(BumFit {
                gamma,
                alpha,
                iterations: iteration,
            });
        }
    }

    warn!(max_iter, gamma, alpha, "BUM fit hit the iteration cap");
    Err(Error::FitDidNotConverge {
        iterations: max_iter,
        tolerance: xtol,
    })
}

fn check_start(gamma: f64, alpha: f64) -> Result<()> {
    if !(gamma > 0.0 && gamma < 1.0) {
        return Err(Error::invalid_parameter("starting gamma", gamma, "(0, 1)"));
    }
    if !(alpha > 0.0 && alpha.is_finite()) {
        return Err(Error::invalid_parameter("starting alpha", alpha, "(0, inf)"));
    }
    Ok(())
}

fn log_pvalues<'a>(pvalues: impl Iterator<Item = &'a f64>) -> Vec<f64> {
    // Zero p-values would make the Beta log-likelihood infinite
    pvalues.map(|&p| p.max(f64::MIN_POSITIVE).ln()).collect()
}

/// Beta-uniform mixture estimator (Pounds & Morris)
///
/// Models the p-value density as `γ + (1 - γ)·α·p^(α-1)` and fits `γ` and
/// `α` by expectation-maximisation. π₀ is the fitted density at `p = 1`,
/// the upper bound `γ + (1 - γ)·α` on the null proportion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bum {
    gamma: f64,
    alpha: f64,
    xtol: f64,
    max_iter: usize,
}

impl Bum {
    /// Create the estimator with default starting values and tolerances
    pub fn new() -> Self {
        Self {
            gamma: DEFAULT_START_GAMMA,
            alpha: DEFAULT_START_ALPHA,
            xtol: DEFAULT_XTOL,
            max_iter: DEFAULT_MAX_ITER,
        }
    }

    /// Set the starting values of `γ ∈ (0, 1)` and `α > 0`
    pub fn with_start(mut self, gamma: f64, alpha: f64) -> Self {
        self.gamma = gamma;
        self.alpha = alpha;
        self
    }

    /// Set the convergence tolerance on the change of the fitted π₀
    pub fn with_xtol(mut self, xtol: f64) -> Self {
        self.xtol = xtol;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Fit the mixture to the p-values
    #[instrument(skip(self, pvalues), fields(k = pvalues.len()))]
    pub fn fit(&self, pvalues: &[f64]) -> Result<BumFit> {
        check_start(self.gamma, self.alpha)?;
        check_fit_settings(self.xtol, self.max_iter)?;
        validate_pvalues(pvalues)?;
        check_sample_size(pvalues, MIN_SAMPLE)?;
        if all_identical(pvalues) {
            return Ok(BumFit::uniform());
        }

        let logs = log_pvalues(pvalues.iter());
        let step = EmStep {
            logs: &logs,
            censored: 0,
            bound: None,
        };
        run_em(&step, (self.gamma, self.alpha), self.xtol, self.max_iter)
    }
}

impl Default for Bum {
    fn default() -> Self {
        Self::new()
    }
}

impl Pi0Estimator for Bum {
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64> {
        self.fit(pvalues).map(|fit| fit.pi0())
    }

    fn name(&self) -> &str {
        "BUM"
    }
}

/// Censored beta-uniform mixture estimator (Markitsis & Lai)
///
/// Same mixture as [`Bum`], but p-values below the censoring bound `λ` only
/// contribute through `F(λ) = γλ + (1 - γ)λ^α`, which makes the fit robust
/// to p-values that pile up at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CensoredBum {
    gamma: f64,
    alpha: f64,
    lambda: f64,
    xtol: f64,
    max_iter: usize,
}

impl CensoredBum {
    /// Create the estimator with default starting values, bound and tolerances
    pub fn new() -> Self {
        Self {
            gamma: DEFAULT_START_GAMMA,
            alpha: DEFAULT_START_ALPHA,
            lambda: DEFAULT_CENSORING,
            xtol: DEFAULT_XTOL,
            max_iter: DEFAULT_MAX_ITER,
        }
    }

    /// Set the starting values of `γ ∈ (0, 1)` and `α > 0`
    pub fn with_start(mut self, gamma: f64, alpha: f64) -> Self {
        self.gamma = gamma;
        self.alpha = alpha;
        self
    }

    /// Set the censoring bound `λ ∈ (0, 1)`
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda;
        self
    }

    /// Set the convergence tolerance on the change of the fitted π₀
    pub fn with_xtol(mut self, xtol: f64) -> Self {
        self.xtol = xtol;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Fit the censored mixture to the p-values
    #[instrument(skip(self, pvalues), fields(k = pvalues.len(), lambda = self.lambda))]
    pub fn fit(&self, pvalues: &[f64]) -> Result<BumFit> {
        check_start(self.gamma, self.alpha)?;
        if !(self.lambda > 0.0 && self.lambda < 1.0) {
            return Err(Error::invalid_parameter("censoring lambda", self.lambda, "(0, 1)"));
        }
        check_fit_settings(self.xtol, self.max_iter)?;
        validate_pvalues(pvalues)?;
        check_sample_size(pvalues, MIN_SAMPLE)?;
        if all_identical(pvalues) {
            return Ok(BumFit::uniform());
        }

        let logs = log_pvalues(pvalues.iter().filter(|&&p| p >= self.lambda));
        let step = EmStep {
            logs: &logs,
            censored: pvalues.len() - logs.len(),
            bound: Some(self.lambda),
        };
        run_em(&step, (self.gamma, self.alpha), self.xtol, self.max_iter)
    }
}

impl Default for CensoredBum {
    fn default() -> Self {
        Self::new()
    }
}

impl Pi0Estimator for CensoredBum {
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64> {
        self.fit(pvalues).map(|fit| fit.pi0())
    }

    fn name(&self) -> &str {
        "Censored BUM"
    }
}
