// src/solvers/grid.rs
use crate::error::{validation::*, SdeResult};
use ndarray::Array1;

/// Uniform time grid `0 = t_0 < t_1 < ... < t_N = T` with `Δt = T / N`.
///
/// The endpoints are exact: `t_0` is `0.0` and `t_N` is `horizon` itself,
/// not `N * Δt`.
pub fn time_grid(horizon: f64, steps: usize) -> SdeResult<Array1<f64>> {
    validate_finite("horizon", horizon)?;
    validate_positive("horizon", horizon)?;
    validate_steps(steps)?;

    let dt = horizon / steps as f64;
    Ok(Array1::from_shape_fn(steps + 1, |i| {
        if i == steps {
            horizon
        } else {
            i as f64 * dt
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_grid_endpoints_and_spacing() {
        for &(horizon, steps) in &[(1.0, 1), (1.0, 1000), (5.0, 7), (0.3, 3)] {
            let grid = time_grid(horizon, steps).unwrap();
            let dt = horizon / steps as f64;

            assert_eq!(grid.len(), steps + 1);
            assert_eq!(grid[0], 0.0);
            assert_eq!(grid[steps], horizon);
            for w in grid.windows(2) {
                assert!(w[1] > w[0]);
                assert_approx_eq!(w[1] - w[0], dt, 1e-12);
            }
        }
    }

    #[test]
    fn test_grid_rejects_invalid_input() {
        assert!(time_grid(1.0, 0).is_err());
        assert!(time_grid(0.0, 10).is_err());
        assert!(time_grid(-1.0, 10).is_err());
        assert!(time_grid(f64::INFINITY, 10).is_err());
    }
}
