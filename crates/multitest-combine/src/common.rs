//! Input checks shared by the combinations

use multitest_core::{validate_pvalues, Error, Result};
use tracing::trace;

/// Validate a non-empty p-value vector
pub(crate) fn check_pvalues(method: &str, pvalues: &[f64]) -> Result<()> {
    if pvalues.is_empty() {
        return Err(Error::empty_input(method));
    }
    validate_pvalues(pvalues)?;
    trace!(method, k = pvalues.len(), "combining p-values");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_pvalues() {
        assert!(check_pvalues("Fisher", &[0.2]).is_ok());
        assert_eq!(
            check_pvalues("Fisher", &[]),
            Err(Error::empty_input("Fisher"))
        );
        assert!(check_pvalues("Fisher", &[0.2, f64::NAN]).is_err());
    }
}
