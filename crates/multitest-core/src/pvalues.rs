//! Validated p-value vectors

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Check that every value lies in [0, 1]
///
/// NaN fails the check as well.
pub fn validate_pvalues(pvalues: &[f64]) -> Result<()> {
    for (i, &p) in pvalues.iter().enumerate() {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_pvalue(i, p));
        }
    }
    Ok(())
}

/// Check the observed/total test counts of a k-of-n adjustment
pub fn validate_total(observed: usize, total: usize) -> Result<()> {
    if total < observed {
        return Err(Error::InvalidInput(format!(
            "total number of tests ({total}) is smaller than the number of p-values ({observed})"
        )));
    }
    Ok(())
}

/// An owned vector of p-values, each guaranteed to lie in [0, 1]
///
/// Dereferences to `[f64]`, so it can be handed to every adjustment,
/// estimator and combination in the workspace.
///
/// # Examples
///
/// ```rust
/// use multitest_core::PValues;
///
/// let pvals = PValues::new(vec![0.001, 0.01, 0.03, 0.5]).unwrap();
/// assert_eq!(pvals.len(), 4);
/// assert!(PValues::new(vec![0.2, 1.2]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct PValues {
    values: Vec<f64>,
}

impl PValues {
    /// Validate and wrap a vector of p-values
    pub fn new(values: Vec<f64>) -> Result<Self> {
        validate_pvalues(&values)?;
        Ok(Self { values })
    }

    /// Borrow the underlying values
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Return the underlying vector
    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }

    /// Smallest p-value, `None` when empty
    pub fn minimum(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::min)
    }
}

impl Deref for PValues {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}

impl AsRef<[f64]> for PValues {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

impl TryFrom<Vec<f64>> for PValues {
    type Error = Error;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for PValues {
    type Error = Error;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}

impl From<PValues> for Vec<f64> {
    fn from(pvalues: PValues) -> Self {
        pvalues.values
    }
}
