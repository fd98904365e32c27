//! Beta-uniform mixture model of a p-value distribution

use multitest_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta, Continuous, ContinuousCDF};

/// Default first shape parameter of the Beta component
pub const DEFAULT_MIXTURE_ALPHA: f64 = 0.5;

/// Default second shape parameter of the Beta component
pub const DEFAULT_MIXTURE_BETA: f64 = 3.0;

/// Mixture `π₀·U(0, 1) + (1 - π₀)·Beta(α, β)`
///
/// The uniform component models true nulls and the Beta component the
/// alternatives, whose p-values pile up near zero when `α < 1 ≤ β`.
///
/// # Examples
///
/// ```rust
/// use multitest_pi0::BetaUniformMixtureModel;
///
/// let model = BetaUniformMixtureModel::new(0.2, 0.5, 1.0).unwrap();
/// assert!((model.pdf(0.2) - 1.094427190999916).abs() < 1e-12);
/// assert!((model.cdf(1.0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BetaUniformMixtureModel {
    pi0: f64,
    alpha: f64,
    beta: f64,
}

impl BetaUniformMixtureModel {
    /// Create a mixture with uniform weight `pi0 ∈ [0, 1]` and positive shapes
    pub fn new(pi0: f64, alpha: f64, beta: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&pi0) {
            return Err(Error::invalid_parameter("mixture pi0", pi0, "[0, 1]"));
        }
        if !(alpha > 0.0 && alpha.is_finite()) {
            return Err(Error::invalid_parameter("mixture alpha", alpha, "(0, inf)"));
        }
        if !(beta > 0.0 && beta.is_finite()) {
            return Err(Error::invalid_parameter("mixture beta", beta, "(0, inf)"));
        }
        Ok(Self { pi0, alpha, beta })
    }

    /// Create a mixture with the default Beta(0.5, 3) alternative
    pub fn with_pi0(pi0: f64) -> Result<Self> {
        Self::new(pi0, DEFAULT_MIXTURE_ALPHA, DEFAULT_MIXTURE_BETA)
    }

    /// Weight of the uniform component
    pub fn pi0(&self) -> f64 {
        self.pi0
    }

    /// First shape parameter of the Beta component
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Second shape parameter of the Beta component
    pub fn beta(&self) -> f64 {
        self.beta
    }

    fn component(&self) -> Beta {
        // Shapes are validated in the constructor
        match Beta::new(self.alpha, self.beta) {
            Ok(beta) => beta,
            Err(_) => unreachable!("validated beta shapes"),
        }
    }

    /// Density at `x`; zero outside [0, 1]
    pub fn pdf(&self, x: f64) -> f64 {
        if !(0.0..=1.0).contains(&x) {
            return 0.0;
        }
        self.pi0 + (1.0 - self.pi0) * self.component().pdf(x)
    }

    /// Distribution function at `x`
    pub fn cdf(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        self.pi0 * x + (1.0 - self.pi0) * self.component().cdf(x)
    }
}
