//! Estimation of the proportion of true null hypotheses
//!
//! Every estimator implements [`Pi0Estimator`] and returns π̂₀ ∈ [0, 1].
//! Estimates feed adaptive procedures such as
//! `multitest_adjust::BenjaminiHochbergAdaptive`.
//!
//! # Supported Estimators
//!
//! ## Closed form:
//! - **Oracle**: a known value
//! - **Storey**: tail proportion above `λ`
//! - **Storey bootstrap**: `λ` chosen by bootstrap MSE
//! - **Right boundary**: end of the flat histogram region
//! - **Least slope**: first decrease of the Schweder-Spjøtvoll slopes
//! - **Two-step**: rejections of an initial adjustment
//!
//! ## Fitted:
//! - **BUM**, **censored BUM**: beta-uniform mixture by EM
//! - **Flat Grenander**: longest flat piece of the Grenander estimate
//! - **Convex decreasing**: convex density fit by iterative mixing of triangles
//!
//! Fitting estimators report [`Error::InsufficientData`] for samples too
//! small to fit and [`Error::FitDidNotConverge`] when the iteration cap is
//! reached; closed-form estimators return 1 for an empty sample.
//!
//! # Examples
//!
//! ```rust
//! use multitest_pi0::{Bum, Pi0Estimator, Storey};
//!
//! let pvals = [0.001, 0.002, 0.01, 0.03, 0.5];
//! let storey = Storey::new().with_lambda(0.4).estimate_pi0(&pvals).unwrap();
//! assert!((storey - 1.0 / 3.0).abs() < 1e-12);
//!
//! let fit = Bum::new().fit(&pvals).unwrap();
//! assert!((fit.pi0() - 0.228).abs() < 1e-3);
//! ```

mod bum;
mod convex_decreasing;
mod fitting;
mod flat_grenander;
mod least_slope;
mod mixture;
mod storey;
mod two_step;

// Re-exports
pub use bum::{Bum, BumFit, CensoredBum, DEFAULT_CENSORING, DEFAULT_START_ALPHA, DEFAULT_START_GAMMA};
pub use convex_decreasing::{
    ConvexDecreasing, ConvexDecreasingFit, DEFAULT_CONVEX_MAX_ITER, DEFAULT_CONVEX_XTOL,
    DEFAULT_GRID_SIZE,
};
pub use fitting::{DEFAULT_MAX_ITER, DEFAULT_XTOL};
pub use flat_grenander::FlatGrenander;
pub use least_slope::LeastSlope;
pub use mixture::{BetaUniformMixtureModel, DEFAULT_MIXTURE_ALPHA, DEFAULT_MIXTURE_BETA};
pub use multitest_core::{Error, Oracle, Pi0Estimator, Result};
pub use storey::{RightBoundary, Storey, StoreyBootstrap, DEFAULT_LAMBDA, DEFAULT_QUANTILE};
pub use two_step::{TwoStep, DEFAULT_ALPHA};

// Convenience constructors
pub fn oracle(pi0: f64) -> Oracle {
    Oracle::new(pi0)
}

pub fn storey() -> Storey {
    Storey::new()
}

pub fn storey_bootstrap() -> StoreyBootstrap {
    StoreyBootstrap::new()
}

pub fn right_boundary() -> RightBoundary {
    RightBoundary::new()
}

pub fn least_slope() -> LeastSlope {
    LeastSlope::new()
}

pub fn two_step() -> TwoStep {
    TwoStep::new()
}

pub fn bum() -> Bum {
    Bum::new()
}

pub fn censored_bum() -> CensoredBum {
    CensoredBum::new()
}

pub fn flat_grenander() -> FlatGrenander {
    FlatGrenander::new()
}

pub fn convex_decreasing() -> ConvexDecreasing {
    ConvexDecreasing::new()
}
