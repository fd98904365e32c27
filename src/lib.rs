//! # multitest
//!
//! Multiple hypothesis testing for analysts running many simultaneous tests.
//!
//! This crate re-exports the multitest workspace:
//!
//! - **Adjustment**: FWER and FDR corrections of p-value vectors
//!   (Bonferroni, Holm, Hommel, Benjamini-Hochberg, ...)
//! - **π₀ estimation**: the proportion of true null hypotheses (Storey,
//!   Beta-Uniform mixtures, Grenander and convex density fits, ...)
//! - **Combination**: one p-value from many independent tests (Fisher,
//!   Stouffer, Simes, ...)
//! - **Higher criticism**: scores and thresholds for sparse signals
//!
//! Every procedure is a small value type implementing its family's trait;
//! the free functions below give each family a single call shape.
//!
//! # Quick Start
//!
//! ```rust
//! use multitest::prelude::*;
//!
//! let pvals = [0.001, 0.01, 0.03, 0.5];
//!
//! let adjusted = adjust(&pvals, BenjaminiHochberg::new()).unwrap();
//! assert!((adjusted[2] - 0.04).abs() < 1e-12);
//!
//! // Four observed out of six tests run
//! let adjusted = adjust_n(&pvals, 6, BenjaminiHochberg::new()).unwrap();
//! assert!((adjusted[3] - 0.75).abs() < 1e-12);
//!
//! // Adaptive BH with a π₀ estimate
//! let adaptive = BenjaminiHochbergAdaptive::new(Oracle::new(0.5));
//! let adjusted = adjust(&pvals, adaptive).unwrap();
//! assert!((adjusted[0] - 0.002).abs() < 1e-12);
//!
//! let pi0 = estimate_pi0(&[0.001, 0.002, 0.01, 0.03, 0.5], Storey::new()).unwrap();
//! assert!((pi0 - 0.2 / 0.9).abs() < 1e-12);
//!
//! let combined = combine(&[0.01, 0.02, 0.3, 0.5], Fisher::new()).unwrap();
//! assert!((combined - 0.007616871850449092).abs() < 1e-12);
//!
//! let threshold = estimate(&pvals, HigherCriticismThreshold::new()).unwrap();
//! assert_eq!(threshold, 0.03);
//! ```

// Re-export the workspace crates
pub use multitest_adjust as adjustment;
pub use multitest_combine as combination;
pub use multitest_core as primitives;
pub use multitest_criticism as criticism;
pub use multitest_pi0 as pi0;

// Core types and traits
pub use multitest_core::{
    Error, Estimate, PValueAdjustment, PValueCombination, PValues, Pi0Estimator, Result,
};

// Strategies
pub use multitest_adjust::{
    BarberCandes, BenjaminiHochberg, BenjaminiHochbergAdaptive, BenjaminiLiu,
    BenjaminiYekutieli, Bonferroni, ForwardStop, Hochberg, Holm, Hommel, Sidak,
};
pub use multitest_combine::{
    Fisher, Logit, MinimumCombination, Simes, Stouffer, Tippett, Wilkinson,
};
pub use multitest_criticism::{HigherCriticismScores, HigherCriticismThreshold, Standardization};
pub use multitest_pi0::{
    BetaUniformMixtureModel, Bum, BumFit, CensoredBum, ConvexDecreasing, ConvexDecreasingFit,
    FlatGrenander, LeastSlope, Oracle, RightBoundary, Storey, StoreyBootstrap, TwoStep,
};

// Convenience constructors
pub use multitest_adjust::{
    barber_candes, benjamini_hochberg, benjamini_hochberg_adaptive, benjamini_liu,
    benjamini_yekutieli, bonferroni, forward_stop, hochberg, holm, hommel, sidak,
};
pub use multitest_combine::{fisher, logit, minimum, simes, stouffer, tippett, wilkinson};
pub use multitest_criticism::{higher_criticism_scores, higher_criticism_threshold};
pub use multitest_pi0::{
    bum, censored_bum, convex_decreasing, flat_grenander, least_slope, oracle, right_boundary,
    storey, storey_bootstrap, two_step,
};

/// Adjust p-values for multiplicity, treating them as the whole family
pub fn adjust<A: PValueAdjustment>(pvalues: &[f64], method: A) -> Result<Vec<f64>> {
    method.adjust(pvalues)
}

/// Adjust the `pvalues.len()` observed p-values out of `n` tests
///
/// The `n - k` unobserved tests count as p-values of 1.
pub fn adjust_n<A: PValueAdjustment>(pvalues: &[f64], n: usize, method: A) -> Result<Vec<f64>> {
    method.adjust_n(pvalues, n)
}

/// Estimate the proportion of true null hypotheses
pub fn estimate_pi0<E: Pi0Estimator>(pvalues: &[f64], estimator: E) -> Result<f64> {
    estimator.estimate_pi0(pvalues)
}

/// Combine independent p-values into one
pub fn combine<C: PValueCombination>(pvalues: &[f64], method: C) -> Result<f64> {
    method.combine(pvalues)
}

/// Weighted Stouffer combination
pub fn combine_weighted(pvalues: &[f64], weights: &[f64]) -> Result<f64> {
    Stouffer::new().combine_weighted(pvalues, weights)
}

/// Compute a p-value statistic such as the higher criticism scores
pub fn estimate<E: Estimate>(pvalues: &[f64], method: E) -> Result<E::Output> {
    method.estimate(pvalues)
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{adjust, adjust_n, combine, combine_weighted, estimate, estimate_pi0};
    pub use crate::{
        BenjaminiHochberg, BenjaminiHochbergAdaptive, Bonferroni, Fisher, HigherCriticismScores,
        HigherCriticismThreshold, Holm, Oracle, Simes, Stouffer, Storey,
    };
    pub use crate::{
        Error, Estimate, PValueAdjustment, PValueCombination, PValues, Pi0Estimator, Result,
    };
}
