//! Isotonic regression and the Grenander density estimator

/// Weighted least-squares non-increasing fit (pool adjacent violators)
///
/// Returns one fitted value per input value. Adjacent values that end up in
/// the same pool share exactly the same fitted value, so constant pieces can
/// be detected with `==`.
///
/// # Examples
///
/// ```rust
/// use multitest_core::isotonic_decreasing;
///
/// let fit = isotonic_decreasing(&[3.0, 1.0, 2.0], &[1.0, 1.0, 1.0]);
/// assert_eq!(fit, vec![3.0, 1.5, 1.5]);
/// ```
pub fn isotonic_decreasing(values: &[f64], weights: &[f64]) -> Vec<f64> {
    debug_assert_eq!(values.len(), weights.len());

    // (pooled value, pooled weight, number of members)
    let mut pools: Vec<(f64, f64, usize)> = Vec::with_capacity(values.len());
    for (&value, &weight) in values.iter().zip(weights) {
        pools.push((value, weight, 1));
        while pools.len() > 1 {
            let (right_value, right_weight, right_count) = pools[pools.len() - 1];
            let (left_value, left_weight, left_count) = pools[pools.len() - 2];
            if left_value > right_value {
                break;
            }
            let weight = left_weight + right_weight;
            let merged = (left_value * left_weight + right_value * right_weight) / weight;
            pools.truncate(pools.len() - 2);
            pools.push((merged, weight, left_count + right_count));
        }
    }

    pools
        .into_iter()
        .flat_map(|(value, _, count)| std::iter::repeat(value).take(count))
        .collect()
}

/// Grenander estimate of a non-increasing density on [0, 1]
///
/// The empirical CDF is evaluated at 0 and at every distinct observation;
/// slopes between consecutive knots are then forced to be non-increasing
/// with knot spacings as weights. The result is the left derivative of the
/// least concave majorant of the ECDF, a step function.
#[derive(Debug, Clone, PartialEq)]
pub struct Grenander {
    /// Knots `x_0 < x_1 < ... < x_m`, starting at 0
    knots: Vec<f64>,
    /// Density on `(x_{j}, x_{j+1}]`, one value per interval
    density: Vec<f64>,
}

impl Grenander {
    /// Fit the estimator to p-values sorted in ascending order
    pub fn fit(sorted: &[f64]) -> Self {
        let n = sorted.len() as f64;
        let mut knots: Vec<f64> = Vec::with_capacity(sorted.len() + 1);
        let mut ecdf: Vec<f64> = Vec::with_capacity(sorted.len() + 1);

        for (i, &p) in sorted.iter().enumerate() {
            let f = (i + 1) as f64 / n;
            match knots.last() {
                Some(&last) if last == p => {
                    if let Some(slot) = ecdf.last_mut() {
                        *slot = f;
                    }
                }
                _ => {
                    knots.push(p);
                    ecdf.push(f);
                }
            }
        }
        if knots.first().map_or(false, |&first| first > 0.0) {
            knots.insert(0, 0.0);
            ecdf.insert(0, 0.0);
        }

        let widths: Vec<f64> = knots.windows(2).map(|w| w[1] - w[0]).collect();
        let slopes: Vec<f64> = ecdf
            .windows(2)
            .zip(&widths)
            .map(|(f, &dx)| (f[1] - f[0]) / dx)
            .collect();
        let density = isotonic_decreasing(&slopes, &widths);

        Self { knots, density }
    }

    /// Knot locations
    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Density value per interval between consecutive knots
    pub fn density(&self) -> &[f64] {
        &self.density
    }

    /// Maximal runs of equal density as `(height, length)` pairs
    pub fn constant_pieces(&self) -> Vec<(f64, f64)> {
        let mut pieces: Vec<(f64, f64)> = Vec::new();
        for (j, &height) in self.density.iter().enumerate() {
            let width = self.knots[j + 1] - self.knots[j];
            match pieces.last_mut() {
                Some((last, length)) if *last == height => *length += width,
                _ => pieces.push((height, width)),
            }
        }
        pieces
    }

    /// Height of the longest constant piece; the first one wins ties
    pub fn longest_constant_height(&self) -> Option<f64> {
        let mut best: Option<(f64, f64)> = None;
        for (height, length) in self.constant_pieces() {
            if best.map_or(true, |(_, best_length)| length > best_length) {
                best = Some((height, length));
            }
        }
        best.map(|(height, _)| height)
    }
}
