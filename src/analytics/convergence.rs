// src/analytics/convergence.rs
//! Strong convergence study on geometric Brownian motion
//!
//! For every step count `N` in the sweep the generator is re-seeded with the
//! same seed, one `(M, N)` increment batch is drawn, and both schemes plus
//! the closed form are driven by that identical batch:
//! ```text
//! X(T) = X_0 · exp((μ - σ²/2) T + σ W(T)),   W(T) = Σ ΔW_n
//! ```
//! The strong error at `N` is the mean over paths of `|X_N - X(T)|`.
//! Fitting `ln(error)` against `ln(N)` gives the empirical order, expected to
//! be about 0.5 for Euler-Maruyama and 1.0 for Milstein.

use crate::brownian::BrownianIncrements;
use crate::error::{validation::*, SdeError, SdeResult};
use crate::math_utils::log_log_slope;
use crate::models::gbm::Gbm;
use crate::rng;
use crate::solvers::{simulate_model_with_increments, Scheme, SimulationParams};

#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceConfig {
    pub x0: f64,
    pub mu: f64,
    pub sigma: f64,
    pub horizon: f64,
    /// Step counts to sweep, in increasing order
    pub steps: Vec<usize>,
    pub paths: usize,
    pub seed: u64,
}

impl ConvergenceConfig {
    pub fn validate(&self) -> SdeResult<()> {
        validate_finite("x0", self.x0)?;
        validate_finite("horizon", self.horizon)?;
        validate_positive("horizon", self.horizon)?;
        Gbm::new(self.mu, self.sigma).validate()?;
        validate_paths(self.paths)?;
        if self.steps.is_empty() {
            return Err(SdeError::InvalidConfiguration {
                field: "steps".to_string(),
                reason: "sweep must contain at least one step count".to_string(),
            });
        }
        for &n in &self.steps {
            validate_steps(n)?;
        }
        Ok(())
    }
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        ConvergenceConfig {
            x0: 1.0,
            mu: 0.5,
            sigma: 0.3,
            horizon: 1.0,
            steps: vec![16, 32, 64, 128, 256, 512, 1024],
            paths: 500,
            seed: 42,
        }
    }
}

/// Mean absolute terminal error of both schemes at one step count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergencePoint {
    pub steps: usize,
    pub euler_error: f64,
    pub milstein_error: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceReport {
    pub points: Vec<ConvergencePoint>,
}

impl ConvergenceReport {
    /// Empirical strong order of Euler-Maruyama
    pub fn euler_order(&self) -> f64 {
        self.order(|p| p.euler_error)
    }

    /// Empirical strong order of Milstein
    pub fn milstein_order(&self) -> f64 {
        self.order(|p| p.milstein_error)
    }

    pub fn order_for(&self, scheme: Scheme) -> f64 {
        match scheme {
            Scheme::EulerMaruyama => self.euler_order(),
            Scheme::Milstein => self.milstein_order(),
        }
    }

    fn order<F: Fn(&ConvergencePoint) -> f64>(&self, error: F) -> f64 {
        let n: Vec<f64> = self.points.iter().map(|p| p.steps as f64).collect();
        let e: Vec<f64> = self.points.iter().map(error).collect();
        -log_log_slope(&n, &e)
    }
}

/// Run the sweep described by `cfg`
pub fn gbm_strong_convergence(cfg: &ConvergenceConfig) -> SdeResult<ConvergenceReport> {
    cfg.validate()?;
    let gbm = Gbm::new(cfg.mu, cfg.sigma);

    let mut points = Vec::with_capacity(cfg.steps.len());
    for &steps in &cfg.steps {
        let params = SimulationParams::new(cfg.x0, cfg.horizon, steps).with_paths(cfg.paths);
        let mut rng = rng::seed_rng_from_u64(cfg.seed);
        let increments = BrownianIncrements::generate(&mut rng, cfg.paths, steps, params.dt());

        let exact = increments
            .terminal()
            .mapv(|w| gbm.exact_terminal(cfg.x0, cfg.horizon, w));

        let euler =
            simulate_model_with_increments(&gbm, Scheme::EulerMaruyama, &params, &increments)?;
        let milstein =
            simulate_model_with_increments(&gbm, Scheme::Milstein, &params, &increments)?;

        let euler_error = (&euler.terminal_values() - &exact).mapv(f64::abs).mean();
        let milstein_error = (&milstein.terminal_values() - &exact).mapv(f64::abs).mean();

        let point = ConvergencePoint {
            steps,
            euler_error: euler_error.unwrap_or(f64::NAN),
            milstein_error: milstein_error.unwrap_or(f64::NAN),
        };
        tracing::debug!(
            steps = steps,
            euler_error = point.euler_error,
            milstein_error = point.milstein_error,
            "convergence point"
        );
        points.push(point);
    }

    Ok(ConvergenceReport { points })
}
