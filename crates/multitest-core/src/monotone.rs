//! Cumulative-extremum corrections and clipping
//!
//! Stepwise procedures compute a raw value per rank and then enforce
//! monotonicity in rank. Which end the running extremum starts from depends
//! on the procedure:
//!
//! - **step-up** (Hochberg, BH, BY, ...): running minimum read from the
//!   largest rank down to rank 1
//! - **step-down** (Holm, Benjamini-Liu): running maximum read from rank 1 up
//!
//! Picking the wrong direction yields plausible-looking but wrong results.

/// Clamp a value into [0, 1]
#[inline]
pub fn clip_unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Clamp every value into [0, 1] in place
pub fn clip_unit_all(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = clip_unit(*v);
    }
}

/// Running minimum from the highest rank down
///
/// # Examples
///
/// ```rust
/// use multitest_core::step_up;
///
/// let mut by_rank = vec![0.004, 0.02, 0.04, 0.5];
/// step_up(&mut by_rank);
/// assert_eq!(by_rank, vec![0.004, 0.02, 0.04, 0.5]);
///
/// let mut by_rank = vec![0.06, 0.05, 0.09, 0.08];
/// step_up(&mut by_rank);
/// assert_eq!(by_rank, vec![0.05, 0.05, 0.08, 0.08]);
/// ```
pub fn step_up(by_rank: &mut [f64]) {
    let mut running = f64::INFINITY;
    for v in by_rank.iter_mut().rev() {
        running = running.min(*v);
        *v = running;
    }
}

/// Running maximum from rank 1 up
///
/// # Examples
///
/// ```rust
/// use multitest_core::step_down;
///
/// let mut by_rank = vec![0.06, 0.05, 0.09, 0.08];
/// step_down(&mut by_rank);
/// assert_eq!(by_rank, vec![0.06, 0.06, 0.09, 0.09]);
/// ```
pub fn step_down(by_rank: &mut [f64]) {
    let mut running = f64::NEG_INFINITY;
    for v in by_rank.iter_mut() {
        running = running.max(*v);
        *v = running;
    }
}
