// src/solvers/euler_maruyama.rs
//! Euler-Maruyama Scheme for SDE Integration
//!
//! # Mathematical Framework
//!
//! For a general SDE:
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! The Euler-Maruyama scheme provides the discretization:
//! ```text
//! X_{n+1} = X_n + a(X_n, t_n) Δt + b(X_n, t_n) ΔW_n
//! ```
//!
//! Where:
//! - `a(x,t)` is the drift coefficient
//! - `b(x,t)` is the diffusion coefficient
//! - `ΔW_n ~ N(0, Δt)` are independent normal increments
//!
//! # Convergence Properties
//!
//! - **Strong convergence**: Order 0.5 in step size
//! - **Weak convergence**: Order 1.0 in step size
//! - **Stability**: Conditionally stable (depends on drift/diffusion)

use super::{integrate, Scheme, Simulation, SimulationParams};
use crate::brownian::BrownianIncrements;
use crate::error::SdeResult;
use ndarray::{Array1, ArrayView1};
use rand::Rng;

type NoCorrection = fn(ArrayView1<f64>, f64) -> Array1<f64>;

/// Simulate `params.paths` independent Euler-Maruyama paths
///
/// # Algorithm
///
/// 1. Validate parameters (nothing is drawn from `rng` on failure)
/// 2. Draw the full `(M, N)` increment batch `ΔW = √Δt · Z`
/// 3. For each step, evaluate `a` and `b` once at the current column
/// 4. Update: `X[:, n+1] = X[:, n] + a Δt + b ΔW[:, n]`
///
/// # Errors
///
/// - `InvalidParameters` / `InvalidConfiguration` for a non-positive horizon,
///   zero steps, or zero paths
/// - `ShapeMismatch` if `drift` or `diffusion` returns neither one value per
///   path nor a single scalar
pub fn euler_maruyama<A, B, R>(
    params: &SimulationParams,
    drift: A,
    diffusion: B,
    rng: &mut R,
) -> SdeResult<Simulation>
where
    A: Fn(ArrayView1<f64>, f64) -> Array1<f64>,
    B: Fn(ArrayView1<f64>, f64) -> Array1<f64>,
    R: Rng + ?Sized,
{
    params.validate()?;
    let increments = BrownianIncrements::generate(rng, params.paths, params.steps, params.dt());
    euler_maruyama_with_increments(params, drift, diffusion, &increments)
}

/// Euler-Maruyama on a caller-owned increment batch of shape `(M, N)`
pub fn euler_maruyama_with_increments<A, B>(
    params: &SimulationParams,
    drift: A,
    diffusion: B,
    increments: &BrownianIncrements,
) -> SdeResult<Simulation>
where
    A: Fn(ArrayView1<f64>, f64) -> Array1<f64>,
    B: Fn(ArrayView1<f64>, f64) -> Array1<f64>,
{
    integrate(
        Scheme::EulerMaruyama,
        params,
        increments,
        drift,
        diffusion,
        None::<NoCorrection>,
    )
}
