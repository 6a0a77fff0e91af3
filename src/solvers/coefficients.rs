// src/solvers/coefficients.rs
//! Building blocks for drift / diffusion / diffusion-derivative functions.
//!
//! A coefficient is any `Fn(ArrayView1<f64>, f64) -> Array1<f64>`: it receives
//! the state of every path at one time point and returns one value per path.
//! A length-1 result is treated as a scalar and broadcast to all paths.

use ndarray::{Array1, ArrayView1};

/// Coefficient that is the same constant for every path and time
pub fn constant(value: f64) -> impl Fn(ArrayView1<f64>, f64) -> Array1<f64> + Clone {
    move |_x: ArrayView1<'_, f64>, _t: f64| Array1::from_elem(1, value)
}

/// `k · x`, e.g. the drift `μX` or diffusion `σX` of geometric Brownian motion
pub fn proportional(k: f64) -> impl Fn(ArrayView1<f64>, f64) -> Array1<f64> + Clone {
    move |x: ArrayView1<'_, f64>, _t: f64| x.mapv(|s| k * s)
}

/// Lift a scalar function `f(x, t)` to act element-wise on all paths
pub fn from_scalar<F>(f: F) -> impl Fn(ArrayView1<f64>, f64) -> Array1<f64>
where
    F: Fn(f64, f64) -> f64,
{
    move |x: ArrayView1<'_, f64>, t: f64| x.mapv(|s| f(s, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_constant_is_scalar() {
        let c = constant(0.3);
        let x = array![1.0, 2.0, 3.0];
        assert_eq!(c(x.view(), 0.5), array![0.3]);
    }

    #[test]
    fn test_proportional() {
        let b = proportional(0.2);
        let x = array![1.0, -2.0];
        assert_eq!(b(x.view(), 0.0), array![0.2, -0.4]);
    }

    #[test]
    fn test_from_scalar_passes_time() {
        let a = from_scalar(|s, t| s + t);
        let x = array![1.0, 2.0];
        assert_eq!(a(x.view(), 0.5), array![1.5, 2.5]);
    }
}
