//! Core traits and types for multiple hypothesis testing
//!
//! This crate provides the foundation shared by the multitest crates:
//!
//! - **Errors**: a single [`Error`] type and [`Result`] alias
//! - **P-values**: validation helpers and the validated [`PValues`] vector
//! - **Traits**: [`PValueAdjustment`], [`Pi0Estimator`], [`PValueCombination`]
//!   and [`Estimate`], one per procedure family, plus the constant
//!   [`Oracle`] estimator
//! - **Primitives**: stable rank ordering, step-up/step-down corrections,
//!   isotonic regression and the Grenander density estimator
//! - **Distributions**: tail probabilities over `statrs`
//!
//! # Example
//!
//! ```rust
//! use multitest_core::{step_up, RankOrder};
//!
//! // Benjamini-Hochberg by hand
//! let pvals = [0.03, 0.001, 0.5, 0.01];
//! let order = RankOrder::ascending(&pvals);
//! let k = pvals.len() as f64;
//! let mut by_rank: Vec<f64> = order
//!     .sorted(&pvals)
//!     .iter()
//!     .enumerate()
//!     .map(|(i, p)| p * k / (i + 1) as f64)
//!     .collect();
//! step_up(&mut by_rank);
//!
//! let adjusted = order.restore(&by_rank);
//! assert!((adjusted[1] - 0.004).abs() < 1e-12);
//! assert!((adjusted[2] - 0.5).abs() < 1e-12);
//! ```

pub mod distributions;
pub mod error;
pub mod isotonic;
pub mod monotone;
pub mod oracle;
pub mod pvalues;
pub mod rank;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};
pub use isotonic::{isotonic_decreasing, Grenander};
pub use monotone::{clip_unit, clip_unit_all, step_down, step_up};
pub use oracle::Oracle;
pub use pvalues::{validate_pvalues, validate_total, PValues};
pub use rank::RankOrder;
pub use traits::{Estimate, PValueAdjustment, PValueCombination, Pi0Estimator};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Error, Estimate, PValueAdjustment, PValueCombination, PValues, Pi0Estimator, Result,
    };
}
