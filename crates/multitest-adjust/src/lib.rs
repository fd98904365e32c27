//! P-value adjustment for multiple hypothesis testing
//!
//! Every procedure implements [`PValueAdjustment`]: it takes the p-values of
//! a family of tests and returns adjusted p-values in the same order, each
//! in [0, 1], that can be compared directly against the nominal level.
//!
//! # Supported Procedures
//!
//! ## Family-wise error rate:
//! - **Bonferroni**, **Šidák**: single-step
//! - **Holm**: step-down
//! - **Hochberg**: step-up
//! - **Hommel**: closed testing with Simes intersection tests
//!
//! ## False discovery rate:
//! - **Benjamini-Hochberg**, and its π₀-adaptive variant
//! - **Benjamini-Yekutieli**: arbitrary dependence
//! - **Benjamini-Liu**: step-down
//! - **ForwardStop**: ordered hypotheses
//! - **Barber-Candès**: knockoff-style FDP estimate
//!
//! # Examples
//!
//! ```rust
//! use multitest_adjust::{BenjaminiHochberg, PValueAdjustment};
//!
//! let pvals = [0.001, 0.01, 0.03, 0.5];
//! let adjusted = BenjaminiHochberg::new().adjust(&pvals).unwrap();
//! assert!((adjusted[2] - 0.04).abs() < 1e-12);
//!
//! // Same p-values as the four smallest of six tests
//! let adjusted = BenjaminiHochberg::new().adjust_n(&pvals, 6).unwrap();
//! assert!((adjusted[3] - 0.75).abs() < 1e-12);
//! ```

mod barber_candes;
mod benjamini_hochberg;
mod benjamini_liu;
mod benjamini_yekutieli;
mod bonferroni;
mod forward_stop;
mod holm;
mod hommel;
mod ranked;

// Re-exports
pub use barber_candes::BarberCandes;
pub use benjamini_hochberg::{BenjaminiHochberg, BenjaminiHochbergAdaptive};
pub use benjamini_liu::BenjaminiLiu;
pub use benjamini_yekutieli::BenjaminiYekutieli;
pub use bonferroni::{Bonferroni, Sidak};
pub use forward_stop::ForwardStop;
pub use holm::{Hochberg, Holm};
pub use hommel::Hommel;
pub use multitest_core::{Error, PValueAdjustment, Pi0Estimator, Result};

// Convenience constructors
pub fn bonferroni() -> Bonferroni {
    Bonferroni::new()
}

pub fn sidak() -> Sidak {
    Sidak::new()
}

pub fn holm() -> Holm {
    Holm::new()
}

pub fn hochberg() -> Hochberg {
    Hochberg::new()
}

pub fn hommel() -> Hommel {
    Hommel::new()
}

pub fn benjamini_hochberg() -> BenjaminiHochberg {
    BenjaminiHochberg::new()
}

pub fn benjamini_hochberg_adaptive<E: Pi0Estimator>(estimator: E) -> BenjaminiHochbergAdaptive<E> {
    BenjaminiHochbergAdaptive::new(estimator)
}

pub fn benjamini_yekutieli() -> BenjaminiYekutieli {
    BenjaminiYekutieli::new()
}

pub fn benjamini_liu() -> BenjaminiLiu {
    BenjaminiLiu::new()
}

pub fn forward_stop() -> ForwardStop {
    ForwardStop::new()
}

pub fn barber_candes() -> BarberCandes {
    BarberCandes::new()
}
