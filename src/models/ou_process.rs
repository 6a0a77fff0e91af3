// src/models/ou_process.rs
//! Ornstein-Uhlenbeck (mean-reverting) process, e.g. for short rates
//!
//! ```text
//! dX_t = θ (μ - X_t) dt + σ dW_t
//! ```

use super::model::SDEModel;
use crate::error::{validation::*, SdeResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OuProcess {
    pub theta: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl OuProcess {
    pub fn new(theta: f64, mu: f64, sigma: f64) -> Self {
        OuProcess { theta, mu, sigma }
    }

    pub fn validate(&self) -> SdeResult<()> {
        validate_finite("theta", self.theta)?;
        validate_positive("theta", self.theta)?;
        validate_finite("mu", self.mu)?;
        validate_finite("sigma", self.sigma)?;
        validate_positive("sigma", self.sigma)?;
        Ok(())
    }

    /// E[X_t | X_0 = x0]
    pub fn exact_mean(&self, x0: f64, t: f64) -> f64 {
        self.mu + (x0 - self.mu) * (-self.theta * t).exp()
    }

    /// Var[X_t | X_0 = x0]
    pub fn exact_variance(&self, t: f64) -> f64 {
        self.sigma * self.sigma / (2.0 * self.theta) * (1.0 - (-2.0 * self.theta * t).exp())
    }
}

impl SDEModel for OuProcess {
    fn drift(&self, s: f64, _t: f64) -> f64 {
        self.theta * (self.mu - s)
    }

    fn diffusion(&self, _s: f64, _t: f64) -> f64 {
        self.sigma
    }

    fn diffusion_derivative(&self, _s: f64, _t: f64) -> f64 {
        0.0 // Derivative of a constant diffusion w.r.t. s is 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;
    use crate::solvers::{simulate_model, Scheme, SimulationParams};

    #[test]
    fn test_validate_rejects_nan() {
        assert!(OuProcess::new(1.0, 1.5, 0.3).validate().is_ok());
        assert!(OuProcess::new(f64::NAN, 0.0, 0.3).validate().is_err());
        assert!(OuProcess::new(1.0, 0.0, f64::NAN).validate().is_err());
        assert!(OuProcess::new(1.0, 0.0, 0.0).validate().is_err());
    }

    #[test]
    fn test_moments_match_closed_form() {
        let ou = OuProcess::new(1.0, 1.5, 0.3);
        let params = SimulationParams::new(0.0, 5.0, 500).with_paths(20_000);

        let sim = simulate_model(&ou, Scheme::EulerMaruyama, &params, &mut rng::seed_rng_from_u64(42))
            .unwrap();
        let summary = sim.summary();

        let exact_mean = ou.exact_mean(0.0, 5.0);
        let exact_std = ou.exact_variance(5.0).sqrt();
        assert!(
            (summary.mean - exact_mean).abs() < 0.01,
            "mean {} vs exact {}",
            summary.mean,
            exact_mean
        );
        assert!(
            (summary.std_dev / exact_std - 1.0).abs() < 0.05,
            "std {} vs exact {}",
            summary.std_dev,
            exact_std
        );
    }

    #[test]
    fn test_milstein_equals_euler_for_additive_noise() {
        let ou = OuProcess::new(0.5, 0.1, 0.2);
        let params = SimulationParams::new(1.0, 1.0, 100).with_paths(8);

        let euler = simulate_model(&ou, Scheme::EulerMaruyama, &params, &mut rng::seed_rng_from_u64(3))
            .unwrap();
        let milstein = simulate_model(&ou, Scheme::Milstein, &params, &mut rng::seed_rng_from_u64(3))
            .unwrap();

        assert_eq!(euler, milstein);
    }
}
