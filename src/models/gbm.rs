// src/models/gbm.rs
//! Geometric Brownian Motion
//!
//! ```text
//! dS_t = μ S_t dt + σ S_t dW_t
//! S_t  = S_0 · exp((μ - σ²/2) t + σ W_t)
//! ```
//!
//! The closed form is driven by the same Brownian path as the numerical
//! schemes, which makes GBM the reference problem for strong convergence.

use super::model::SDEModel;
use crate::brownian::BrownianIncrements;
use crate::error::{validation::*, SdeError, SdeResult};
use ndarray::{Array2, ArrayView1, Zip};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gbm {
    pub mu: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Gbm { mu, sigma }
    }

    pub fn validate(&self) -> SdeResult<()> {
        validate_finite("mu", self.mu)?;
        validate_finite("sigma", self.sigma)?;
        validate_positive("sigma", self.sigma)?;
        Ok(())
    }

    /// Exact solution at time `t` given the Brownian value `W(t)`
    pub fn exact_terminal(&self, s0: f64, t: f64, w_t: f64) -> f64 {
        s0 * ((self.mu - 0.5 * self.sigma * self.sigma) * t + self.sigma * w_t).exp()
    }

    /// Exact paths on `grid` for the Brownian paths built from `increments`
    pub fn exact_paths(
        &self,
        s0: f64,
        grid: ArrayView1<f64>,
        increments: &BrownianIncrements,
    ) -> SdeResult<Array2<f64>> {
        let (_, steps) = increments.shape();
        if grid.len() != steps + 1 {
            return Err(SdeError::ShapeMismatch {
                function: "grid".to_string(),
                expected: format!("length {}", steps + 1),
                received: format!("length {}", grid.len()),
            });
        }

        let mut w = increments.cumulative();
        for mut row in w.outer_iter_mut() {
            Zip::from(&mut row)
                .and(&grid)
                .for_each(|x, &t| *x = self.exact_terminal(s0, t, *x));
        }
        Ok(w)
    }
}

impl SDEModel for Gbm {
    fn drift(&self, s: f64, _t: f64) -> f64 {
        self.mu * s
    }

    fn diffusion(&self, s: f64, _t: f64) -> f64 {
        self.sigma * s
    }

    fn diffusion_derivative(&self, _s: f64, _t: f64) -> f64 {
        self.sigma
    }
}
