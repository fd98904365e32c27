//! Convex non-increasing density estimator

use crate::fitting::{all_identical, check_fit_settings, check_sample_size};
use multitest_core::{validate_pvalues, Error, Pi0Estimator, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Default number of triangular components
pub const DEFAULT_GRID_SIZE: usize = 100;

/// Default tolerance on the step of π₀ and on the line search
pub const DEFAULT_CONVEX_XTOL: f64 = 1e-5;

/// Default iteration cap of the convex fit
pub const DEFAULT_CONVEX_MAX_ITER: usize = 100_000;

/// Most bisection steps of one line search
const LINE_SEARCH_STEPS: usize = 60;

/// Density `2(θ - x)₊ / θ²` of the triangular component with apex at 0
fn triangle(theta: f64, x: f64) -> f64 {
    if x < theta {
        2.0 * (theta - x) / (theta * theta)
    } else {
        0.0
    }
}

/// Convex non-increasing density fitted to a p-value sample
///
/// Mixture of the uniform density with weight `uniform_weight` and the
/// triangular densities `2(θ - x)₊ / θ²` at `θ = 1/G, 2/G, ..., 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvexDecreasingFit {
    /// Weight of the uniform component, the density at `p = 1`
    pub uniform_weight: f64,
    /// `(θ, weight)` of every triangular component
    pub triangles: Vec<(f64, f64)>,
    /// Iterations used
    pub iterations: usize,
}

impl ConvexDecreasingFit {
    /// Fitted density at `x`
    pub fn density(&self, x: f64) -> f64 {
        self.uniform_weight
            + self
                .triangles
                .iter()
                .map(|&(theta, weight)| weight * triangle(theta, x))
                .sum::<f64>()
    }

    /// π₀ as the fitted density at `p = 1`, clipped to [0, 1]
    pub fn pi0(&self) -> f64 {
        self.uniform_weight.clamp(0.0, 1.0)
    }
}

/// Convex decreasing density estimator (Langaas, Lindqvist & Ferkingstad)
///
/// Maximum likelihood fit of a convex non-increasing density over a grid of
/// triangular components plus the uniform density. The fit starts from the
/// uniform density. Each iteration picks the component with the largest
/// score `Σ g(pᵢ) / f(pᵢ)`, falling back to the uniform component when it
/// scores higher than every triangle, and mixes it in with the weight that
/// maximises the likelihood, found by bisection to within `xtol`. The fit
/// stops once an iteration moves π₀ by at most `xtol`. π₀ is the fitted
/// density at `p = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConvexDecreasing {
    grid_size: usize,
    xtol: f64,
    max_iter: usize,
}

impl ConvexDecreasing {
    /// Create the estimator with the default grid and tolerances
    pub fn new() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            xtol: DEFAULT_CONVEX_XTOL,
            max_iter: DEFAULT_CONVEX_MAX_ITER,
        }
    }

    /// Set the number of triangular components
    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    /// Set the tolerance on the step of π₀ and on the line search
    pub fn with_xtol(mut self, xtol: f64) -> Self {
        self.xtol = xtol;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Fit the mixture to the p-values
    #[instrument(skip(self, pvalues), fields(k = pvalues.len(), grid = self.grid_size))]
    pub fn fit(&self, pvalues: &[f64]) -> Result<ConvexDecreasingFit> {
        if self.grid_size == 0 {
            return Err(Error::InvalidInput("grid size must be positive".to_string()));
        }
        check_fit_settings(self.xtol, self.max_iter)?;
        validate_pvalues(pvalues)?;
        check_sample_size(pvalues, 2)?;

        let thetas: Vec<f64> = (1..=self.grid_size)
            .map(|j| j as f64 / self.grid_size as f64)
            .collect();
        if all_identical(pvalues) {
            return Ok(ConvexDecreasingFit {
                uniform_weight: 1.0,
                triangles: thetas.into_iter().map(|theta| (theta, 0.0)).collect(),
                iterations: 0,
            });
        }

        // Row 0 is the uniform component
        let mut basis: Vec<Vec<f64>> = Vec::with_capacity(thetas.len() + 1);
        basis.push(vec![1.0; pvalues.len()]);
        for &theta in &thetas {
            basis.push(pvalues.iter().map(|&p| triangle(theta, p)).collect());
        }

        let mut weights = vec![0.0; basis.len()];
        weights[0] = 1.0;
        let mut fitted = vec![1.0; pvalues.len()];
        let mut target = best_component(&basis, &fitted);

        for iteration in 1..=self.max_iter {
            let direction: Vec<f64> = basis[target]
                .iter()
                .zip(&fitted)
                .map(|(g, f)| g - f)
                .collect();
            let gain: f64 = direction.iter().zip(&fitted).map(|(d, f)| d / f).sum();
            let step = if gain > 0.0 {
                line_search(&fitted, &direction, self.xtol)
            } else {
                0.0
            };

            for (f, g) in fitted.iter_mut().zip(&basis[target]) {
                *f = (1.0 - step) * *f + step * g;
            }
            let previous = weights[0];
            for (component, weight) in weights.iter_mut().enumerate() {
                let hit = if component == target { 1.0 } else { 0.0 };
                *weight = (1.0 - step) * *weight + step * hit;
            }

            if (weights[0] - previous).abs() <= self.xtol {
                debug!(iterations = iteration, pi0 = weights[0], "convex fit converged");
                return Ok(ConvexDecreasingFit {
                    uniform_weight: weights[0],
                    triangles: thetas.into_iter().zip(weights.into_iter().skip(1)).collect(),
                    iterations: iteration,
                });
            }
            target = best_component(&basis, &fitted);
        }

        warn!(max_iter = self.max_iter, pi0 = weights[0], "convex fit hit the iteration cap");
        Err(Error::FitDidNotConverge {
            iterations: self.max_iter,
            tolerance: self.xtol,
        })
    }
}

/// Component with the largest score `Σ g(pᵢ) / f(pᵢ)`
///
/// The first triangle wins ties among triangles. The uniform component,
/// row 0, is chosen only when it strictly beats every triangle.
fn best_component(basis: &[Vec<f64>], fitted: &[f64]) -> usize {
    let score = |row: &[f64]| row.iter().zip(fitted).map(|(g, f)| g / f).sum::<f64>();
    let mut best = (0, f64::NEG_INFINITY);
    for (component, row) in basis.iter().enumerate().skip(1) {
        let current = score(row);
        if current > best.1 {
            best = (component, current);
        }
    }
    if best.1 < score(&basis[0]) {
        0
    } else {
        best.0
    }
}

/// Maximise `Σ ln(fᵢ + e·dᵢ)` over `e ∈ [0, 1]` by bisection
///
/// The objective is concave in `e`; bisection stops once the bracket is
/// narrower than `tolerance` and returns the last midpoint.
fn line_search(fitted: &[f64], direction: &[f64], tolerance: f64) -> f64 {
    let slope = |e: f64| {
        fitted
            .iter()
            .zip(direction)
            .map(|(f, d)| d / (f + e * d))
            .sum::<f64>()
    };

    let (mut lo, mut hi) = (0.0, 1.0);
    let mut step = 0.0;
    for _ in 0..LINE_SEARCH_STEPS {
        if hi - lo <= tolerance {
            break;
        }
        step = 0.5 * (lo + hi);
        if slope(step) < 0.0 {
            hi = step;
        } else {
            lo = step;
        }
    }
    step
}

impl Default for ConvexDecreasing {
    fn default() -> Self {
        Self::new()
    }
}

impl Pi0Estimator for ConvexDecreasing {
    fn estimate_pi0(&self, pvalues: &[f64]) -> Result<f64> {
        self.fit(pvalues).map(|fit| fit.pi0())
    }

    fn name(&self) -> &str {
        "Convex decreasing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitting::DEFAULT_MAX_ITER;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_triangle_density() {
        assert_relative_eq!(triangle(0.5, 0.0), 4.0);
        assert_relative_eq!(triangle(0.5, 0.25), 2.0);
        assert_eq!(triangle(0.5, 0.5), 0.0);
        assert_eq!(triangle(1.0, 1.0), 0.0);
    }

    #[test]
    fn test_convex_reference_sample() {
        // Strong signal: almost no uniform mass remains
        let fit = ConvexDecreasing::new()
            .fit(&[0.001, 0.002, 0.01, 0.03, 0.5])
            .unwrap();
        assert_abs_diff_eq!(fit.pi0(), 0.013007051336745304, epsilon = 1e-12);
        assert_eq!(fit.iterations, 393);
    }

    #[test]
    fn test_convex_uniform_grid_is_all_null() {
        let p: Vec<f64> = (1..=200).map(|i| (i as f64 - 0.5) / 200.0).collect();
        let fit = ConvexDecreasing::new().fit(&p).unwrap();
        assert_eq!(fit.iterations, 1);
        assert_eq!(fit.pi0(), 1.0);
    }

    #[test]
    fn test_convex_small_samples_converge() {
        // Steps shrink slowly when the fit alternates between two components
        let p = [0.0958, 0.1669, 0.6051, 0.3280, 0.9146];
        for grid_size in [20, DEFAULT_GRID_SIZE] {
            let fit = ConvexDecreasing::new().with_grid_size(grid_size).fit(&p).unwrap();
            assert!(fit.iterations > DEFAULT_MAX_ITER, "{}", fit.iterations);
            assert!((0.0..=1.0).contains(&fit.pi0()));
        }
    }

    #[test]
    fn test_line_search_brackets_the_optimum() {
        // Σ ln(1 + e·d) with d = (1, -0.5) peaks at e = 0.5
        let step = line_search(&[1.0, 1.0], &[1.0, -0.5], 1e-8);
        assert_abs_diff_eq!(step, 0.5, epsilon = 1e-7);
        // d = (1, -0.2) still rises at e = 1
        let step = line_search(&[1.0, 1.0], &[1.0, -0.2], 1e-8);
        assert_abs_diff_eq!(step, 1.0, epsilon = 1e-7);
        // d = (1, -1) peaks at e = 0
        let step = line_search(&[1.0, 1.0], &[1.0, -1.0], 1e-8);
        assert_abs_diff_eq!(step, 0.0, epsilon = 1e-7);
        // A tolerance finer than f64 spacing still terminates
        let step = line_search(&[1.0, 1.0], &[1.0, -0.9], 1e-300);
        assert!(step > 0.0 && step < 1.0);
    }

    #[test]
    fn test_convex_fit_is_a_convex_decreasing_density() {
        let p = [0.01, 0.02, 0.05, 0.1, 0.3, 0.45, 0.6, 0.8, 0.95];
        let fit = ConvexDecreasing::new().fit(&p).unwrap();

        let total: f64 = fit.uniform_weight + fit.triangles.iter().map(|t| t.1).sum::<f64>();
        assert_relative_eq!(total, 1.0, epsilon = 1e-9);
        assert!(fit.triangles.iter().all(|t| t.1 >= 0.0));

        let grid: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
        let values: Vec<f64> = grid.iter().map(|&x| fit.density(x)).collect();
        assert!(values.windows(2).all(|w| w[0] + 1e-12 >= w[1]));
        assert!(values.windows(3).all(|w| w[0] - 2.0 * w[1] + w[2] >= -1e-9));
    }

    #[test]
    fn test_convex_degenerate_inputs() {
        assert_eq!(
            ConvexDecreasing::new().estimate_pi0(&[0.3]),
            Err(Error::InsufficientData {
                expected: 2,
                actual: 1
            })
        );
        assert_eq!(ConvexDecreasing::new().estimate_pi0(&[0.7, 0.7]).unwrap(), 1.0);
        assert!(ConvexDecreasing::new()
            .with_grid_size(0)
            .estimate_pi0(&[0.1, 0.2])
            .is_err());
    }

    #[test]
    fn test_convex_iteration_cap() {
        let result = ConvexDecreasing::new()
            .with_max_iter(1)
            .estimate_pi0(&[0.001, 0.002, 0.01, 0.03, 0.5]);
        assert!(matches!(result, Err(Error::FitDidNotConverge { iterations: 1, .. })));
    }
}
