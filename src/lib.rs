//! # sde-solver: Fixed-Step Integrators for Scalar SDEs
//!
//! Numerical approximation of stochastic differential equations
//! ```text
//! dX(t) = a(X, t) dt + b(X, t) dW(t)
//! ```
//! with two explicit schemes over a uniform time grid:
//!
//! - **Euler-Maruyama**: strong order 0.5
//! - **Milstein**: strong order 1.0, adds `½ b b' (ΔW² - Δt)` using `b' = ∂b/∂X`
//!
//! Each call simulates `M` independent paths over `N` steps and returns the
//! `N+1` point time grid together with the `(M, N+1)` path ensemble.
//!
//! ## Quick Start
//!
//! ```rust
//! use sde_solver::rng;
//! use sde_solver::solvers::{coefficients, milstein, SimulationParams};
//!
//! // Geometric Brownian motion: a = μX, b = σX, b' = σ
//! let params = SimulationParams::new(100.0, 1.0, 1000).with_paths(5);
//! let mut rng = rng::seed_rng_from_u64(42);
//!
//! let sim = milstein(
//!     &params,
//!     coefficients::proportional(0.1),
//!     coefficients::proportional(0.2),
//!     coefficients::constant(0.2),
//!     &mut rng,
//! )
//! .expect("Valid parameters");
//!
//! assert_eq!(sim.shape(), (5, 1001));
//! assert_eq!(sim.grid()[1000], 1.0);
//! ```
//!
//! ## Randomness
//!
//! The integrators never seed anything themselves: the generator is passed
//! in explicitly. Re-seeding it before each call reproduces the same
//! increments, so schemes can be compared on identical noise.

// Module declarations
pub mod analytics;
pub mod brownian;
pub mod error;
pub mod math_utils;
pub mod models;
pub mod rng;
pub mod solvers;

// Re-export commonly used types for convenience
pub use brownian::BrownianIncrements;
pub use error::{SdeError, SdeResult};
pub use solvers::{euler_maruyama, milstein, Scheme, Simulation, SimulationParams};
