//! Combination of independent p-values
//!
//! Every method implements [`PValueCombination`]: k p-values from
//! independent tests of the same global null go in, one p-value comes out.
//! Empty input is rejected.
//!
//! # Supported Combinations
//!
//! - **Fisher**: χ² of the summed log p-values
//! - **Stouffer**: weighted sum of normal scores
//! - **Logit**: Student-t approximation of the summed logits
//! - **Tippett**, **Simes**, **Wilkinson**: order statistics
//! - **Minimum**: smallest p-value after any adjustment
//!
//! # Examples
//!
//! ```rust
//! use multitest_combine::{Fisher, PValueCombination, Stouffer};
//!
//! let pvals = [0.01, 0.02, 0.3, 0.5];
//! let fisher = Fisher::new().combine(&pvals).unwrap();
//! assert!((fisher - 0.0076169).abs() < 1e-6);
//!
//! let weighted = Stouffer::new()
//!     .combine_weighted(&pvals, &[1.0, 2.0, 0.4, 1.5])
//!     .unwrap();
//! assert!((weighted - 0.0073317).abs() < 1e-6);
//! ```

mod common;
mod fisher;
mod logit;
mod minimum;
mod order_statistics;
mod stouffer;

// Re-exports
pub use fisher::Fisher;
pub use logit::Logit;
pub use minimum::MinimumCombination;
pub use multitest_core::{Error, PValueAdjustment, PValueCombination, Result};
pub use order_statistics::{Simes, Tippett, Wilkinson};
pub use stouffer::Stouffer;

// Convenience constructors
pub fn fisher() -> Fisher {
    Fisher::new()
}

pub fn stouffer() -> Stouffer {
    Stouffer::new()
}

pub fn logit() -> Logit {
    Logit::new()
}

pub fn tippett() -> Tippett {
    Tippett::new()
}

pub fn simes() -> Simes {
    Simes::new()
}

pub fn wilkinson(rank: usize) -> Wilkinson {
    Wilkinson::new(rank)
}

pub fn minimum<A: PValueAdjustment>(adjustment: A) -> MinimumCombination<A> {
    MinimumCombination::new(adjustment)
}
