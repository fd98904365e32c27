//! Higher criticism for rare and weak signals
//!
//! Higher criticism compares the empirical distribution of the p-values
//! with the uniform distribution expected under the global null. A large
//! standardised gap at some order statistic signals a sparse set of
//! non-null tests; the p-value where the gap peaks is a data-driven
//! rejection threshold.
//!
//! Both statistics implement [`Estimate`]:
//!
//! - [`HigherCriticismScores`]: one score per p-value, in input order
//! - [`HigherCriticismThreshold`]: the p-value at the maximal score
//!
//! # Examples
//!
//! ```rust
//! use multitest_criticism::{Estimate, HigherCriticismScores, HigherCriticismThreshold};
//!
//! let pvals = [0.001, 0.01, 0.03, 0.5];
//!
//! let scores = HigherCriticismScores::new().estimate(&pvals).unwrap();
//! assert_eq!(scores.len(), 4);
//!
//! let threshold = HigherCriticismThreshold::new().estimate(&pvals).unwrap();
//! assert_eq!(threshold, 0.03);
//! ```

mod scores;
mod threshold;

// Re-exports
pub use multitest_core::{Error, Estimate, Result};
pub use scores::{HigherCriticismScores, Standardization, BOUNDARY_EPSILON};
pub use threshold::{HigherCriticismThreshold, DEFAULT_ALPHA0};

// Convenience constructors
pub fn higher_criticism_scores() -> HigherCriticismScores {
    HigherCriticismScores::new()
}

pub fn higher_criticism_threshold(alpha0: f64) -> HigherCriticismThreshold {
    HigherCriticismThreshold::new().with_alpha0(alpha0)
}
