// src/brownian.rs
//! Brownian Increment Batches
//!
//! A Wiener process has independent Gaussian increments with variance equal
//! to the elapsed time:
//! ```text
//! ΔW_n = W(t_{n+1}) - W(t_n) ~ N(0, Δt)
//! ```
//!
//! The integrators draw the whole `(paths, steps)` batch up front instead of
//! one increment at a time. Re-seeding the generator before each call then
//! reproduces the exact same noise realization, which is what lets two
//! schemes (or a scheme and a closed-form solution) be compared path by path.

use crate::error::{validation::*, SdeError, SdeResult};
use crate::rng;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::Rng;

/// An `(M, N)` batch of i.i.d. `N(0, Δt)` increments
#[derive(Debug, Clone, PartialEq)]
pub struct BrownianIncrements {
    dt: f64,
    values: Array2<f64>,
}

impl BrownianIncrements {
    /// Draw `paths × steps` increments as `√Δt · Z` with `Z ~ N(0,1)`.
    ///
    /// Draws are consumed in row-major order: all steps of path 0, then all
    /// steps of path 1, and so on.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, paths: usize, steps: usize, dt: f64) -> Self {
        let sqrt_dt = dt.sqrt();
        let values = Array2::from_shape_simple_fn((paths, steps), || {
            sqrt_dt * rng::get_normal_draw(rng)
        });
        Self { dt, values }
    }

    /// Wrap caller-provided increments
    pub fn from_array(values: Array2<f64>, dt: f64) -> SdeResult<Self> {
        validate_finite("dt", dt)?;
        validate_positive("dt", dt)?;
        let (paths, steps) = values.dim();
        validate_paths(paths)?;
        validate_steps(steps)?;
        Ok(Self { dt, values })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// `(paths, steps)`
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn values(&self) -> ArrayView2<'_, f64> {
        self.values.view()
    }

    /// Increments of every path for a single step
    pub fn step(&self, index: usize) -> ArrayView1<'_, f64> {
        self.values.column(index)
    }

    /// W(T) for every path (sum of its increments)
    pub fn terminal(&self) -> Array1<f64> {
        self.values.map_axis(Axis(1), |row| row.sum())
    }

    /// Brownian paths of shape `(paths, steps + 1)` with `W(0) = 0`
    pub fn cumulative(&self) -> Array2<f64> {
        let (paths, steps) = self.values.dim();
        let mut w = Array2::zeros((paths, steps + 1));
        for (mut w_row, dw_row) in w.outer_iter_mut().zip(self.values.outer_iter()) {
            let mut acc = 0.0;
            for (k, &dw) in dw_row.iter().enumerate() {
                acc += dw;
                w_row[k + 1] = acc;
            }
        }
        w
    }

    /// Check that this batch lines up with a `(paths, steps)` simulation
    pub(crate) fn ensure_shape(&self, paths: usize, steps: usize) -> SdeResult<()> {
        if self.values.dim() != (paths, steps) {
            return Err(SdeError::ShapeMismatch {
                function: "increments".to_string(),
                expected: format!("shape ({}, {})", paths, steps),
                received: format!("shape {:?}", self.values.dim()),
            });
        }
        Ok(())
    }

    /// Check that this batch was drawn at the simulation's step size
    pub(crate) fn ensure_dt(&self, dt: f64) -> SdeResult<()> {
        let tolerance = 1e-9 * self.dt.abs().max(dt.abs());
        if (self.dt - dt).abs() > tolerance {
            return Err(SdeError::InvalidConfiguration {
                field: "increments".to_string(),
                reason: format!("drawn at dt = {}, simulation uses dt = {}", self.dt, dt),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use ndarray::array;

    #[test]
    fn test_generate_shape_and_moments() {
        let mut rng = rng::seed_rng_from_u64(7);
        let dt = 0.01;
        let increments = BrownianIncrements::generate(&mut rng, 200, 100, dt);
        assert_eq!(increments.shape(), (200, 100));

        let n = (200 * 100) as f64;
        let mean = increments.values().sum() / n;
        let variance = increments.values().mapv(|x| (x - mean).powi(2)).sum() / n;

        assert!(mean.abs() < 0.005, "Mean should be close to 0, got {}", mean);
        assert!(
            (variance / dt - 1.0).abs() < 0.05,
            "Variance should be close to dt, got {}",
            variance
        );
    }

    #[test]
    fn test_same_seed_same_batch() {
        let a = BrownianIncrements::generate(&mut rng::seed_rng_from_u64(3), 4, 10, 0.1);
        let b = BrownianIncrements::generate(&mut rng::seed_rng_from_u64(3), 4, 10, 0.1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_row_major_draw_order() {
        let dt = 0.25;
        let increments = BrownianIncrements::generate(&mut rng::seed_rng_from_u64(11), 2, 3, dt);

        let mut rng = rng::seed_rng_from_u64(11);
        let expected: Vec<f64> = (0..6).map(|_| dt.sqrt() * rng::get_normal_draw(&mut rng)).collect();

        assert_eq!(increments.values()[[0, 2]], expected[2]);
        assert_eq!(increments.values()[[1, 0]], expected[3]);
    }

    #[test]
    fn test_cumulative_and_terminal() {
        let values = array![[0.1, -0.2, 0.3], [1.0, 1.0, -0.5]];
        let increments = BrownianIncrements::from_array(values, 0.1).unwrap();

        let w = increments.cumulative();
        assert_eq!(w.dim(), (2, 4));
        assert_eq!(w[[0, 0]], 0.0);
        assert_approx_eq!(w[[0, 2]], -0.1, 1e-12);
        assert_approx_eq!(w[[1, 3]], 1.5, 1e-12);

        let terminal = increments.terminal();
        assert_approx_eq!(terminal[0], 0.2, 1e-12);
        assert_approx_eq!(terminal[1], 1.5, 1e-12);
    }

    #[test]
    fn test_from_array_rejects_bad_dt() {
        assert!(BrownianIncrements::from_array(array![[0.1]], 0.0).is_err());
        assert!(BrownianIncrements::from_array(array![[0.1]], f64::NAN).is_err());
    }

    #[test]
    fn test_ensure_shape() {
        let increments = BrownianIncrements::from_array(Array2::zeros((3, 5)), 0.2).unwrap();
        assert!(increments.ensure_shape(3, 5).is_ok());
        match increments.ensure_shape(3, 4) {
            Err(SdeError::ShapeMismatch { function, .. }) => assert_eq!(function, "increments"),
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_ensure_dt() {
        let increments = BrownianIncrements::from_array(Array2::zeros((2, 10)), 0.1).unwrap();
        assert!(increments.ensure_dt(1.0 / 10.0).is_ok());
        assert!(increments.ensure_dt(0.3 / 3.0).is_ok());
        match increments.ensure_dt(0.2) {
            Err(SdeError::InvalidConfiguration { field, .. }) => assert_eq!(field, "increments"),
            other => panic!("expected increments configuration error, got {:?}", other),
        }
    }
}
