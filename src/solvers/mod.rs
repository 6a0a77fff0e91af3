// src/solvers/mod.rs
//! Fixed-step integrators for scalar SDEs
//!
//! ```text
//! dX_t = a(X_t, t) dt + b(X_t, t) dW_t
//! ```
//!
//! Both schemes advance all `M` paths one column at a time over a uniform
//! grid of `N` steps. Column `i + 1` depends only on column `i`, the
//! increments of step `i`, and the coefficients evaluated at `(X[:, i], t_i)`.
//! The per-step update is independent across paths and may run on the rayon
//! pool; the steps themselves are always sequential.

pub mod coefficients;
pub mod euler_maruyama;
pub mod grid;
pub mod milstein;

use crate::brownian::BrownianIncrements;
use crate::error::{validation::*, SdeError, SdeResult};
use crate::math_utils::{self, TerminalSummary};
use crate::models::model::SDEModel;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Zip};
use rand::Rng;
use std::fmt;

pub use euler_maruyama::{euler_maruyama, euler_maruyama_with_increments};
pub use grid::time_grid;
pub use milstein::{milstein, milstein_with_increments};

/// Numerical scheme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    EulerMaruyama,
    Milstein,
}

impl Scheme {
    /// Theoretical strong convergence order
    pub fn strong_order(&self) -> f64 {
        match self {
            Scheme::EulerMaruyama => 0.5,
            Scheme::Milstein => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scheme::EulerMaruyama => "euler_maruyama",
            Scheme::Milstein => "milstein",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of one simulation call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    /// Initial value shared by every path
    pub x0: f64,
    /// Time horizon T
    pub horizon: f64,
    /// Number of steps N
    pub steps: usize,
    /// Number of independent paths M
    pub paths: usize,
    /// Run the per-step update across paths on the rayon pool
    pub parallel: bool,
}

impl SimulationParams {
    pub fn new(x0: f64, horizon: f64, steps: usize) -> Self {
        SimulationParams {
            x0,
            horizon,
            steps,
            ..Default::default()
        }
    }

    pub fn with_paths(mut self, paths: usize) -> Self {
        self.paths = paths;
        self
    }

    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    pub fn dt(&self) -> f64 {
        self.horizon / self.steps as f64
    }

    /// Validate the simulation parameters
    pub fn validate(&self) -> SdeResult<()> {
        validate_finite("x0", self.x0)?;
        validate_finite("horizon", self.horizon)?;
        validate_positive("horizon", self.horizon)?;
        validate_steps(self.steps)?;
        validate_paths(self.paths)?;
        Ok(())
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            x0: 1.0,
            horizon: 1.0,
            steps: 1000,
            paths: 1,
            parallel: false,
        }
    }
}

/// Output of one simulation call: the time grid and the `(M, N+1)` path ensemble
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation {
    grid: Array1<f64>,
    paths: Array2<f64>,
}

impl Simulation {
    pub fn grid(&self) -> ArrayView1<'_, f64> {
        self.grid.view()
    }

    pub fn paths(&self) -> ArrayView2<'_, f64> {
        self.paths.view()
    }

    /// `(M, N+1)`
    pub fn shape(&self) -> (usize, usize) {
        self.paths.dim()
    }

    pub fn dt(&self) -> f64 {
        self.grid[1] - self.grid[0]
    }

    /// Trajectory of a single path
    pub fn path(&self, index: usize) -> ArrayView1<'_, f64> {
        self.paths.row(index)
    }

    /// X(T) for every path
    pub fn terminal_values(&self) -> ArrayView1<'_, f64> {
        self.paths.column(self.paths.ncols() - 1)
    }

    pub fn summary(&self) -> TerminalSummary {
        math_utils::terminal_summary(self.terminal_values())
    }

    pub fn into_parts(self) -> (Array1<f64>, Array2<f64>) {
        (self.grid, self.paths)
    }
}

/// Simulate an [`SDEModel`] with the chosen scheme
pub fn simulate_model<M, R>(
    model: &M,
    scheme: Scheme,
    params: &SimulationParams,
    rng: &mut R,
) -> SdeResult<Simulation>
where
    M: SDEModel + ?Sized,
    R: Rng + ?Sized,
{
    params.validate()?;
    let increments = BrownianIncrements::generate(rng, params.paths, params.steps, params.dt());
    simulate_model_with_increments(model, scheme, params, &increments)
}

/// Simulate an [`SDEModel`] on a caller-provided increment batch
pub fn simulate_model_with_increments<M>(
    model: &M,
    scheme: Scheme,
    params: &SimulationParams,
    increments: &BrownianIncrements,
) -> SdeResult<Simulation>
where
    M: SDEModel + ?Sized,
{
    let drift = coefficients::from_scalar(|s, t| model.drift(s, t));
    let diffusion = coefficients::from_scalar(|s, t| model.diffusion(s, t));
    match scheme {
        Scheme::EulerMaruyama => {
            euler_maruyama_with_increments(params, drift, diffusion, increments)
        }
        Scheme::Milstein => milstein_with_increments(
            params,
            drift,
            diffusion,
            coefficients::from_scalar(|s, t| model.diffusion_derivative(s, t)),
            increments,
        ),
    }
}

/// Shared column-advance loop of both schemes.
///
/// With `diffusion_prime = None` this is Euler-Maruyama; with a derivative it
/// adds the Milstein correction `½ b b' (ΔW² - Δt)`. All coefficients are
/// evaluated once per step at the current column and reused.
pub(crate) fn integrate<A, B, C>(
    scheme: Scheme,
    params: &SimulationParams,
    increments: &BrownianIncrements,
    drift: A,
    diffusion: B,
    diffusion_prime: Option<C>,
) -> SdeResult<Simulation>
where
    A: Fn(ArrayView1<f64>, f64) -> Array1<f64>,
    B: Fn(ArrayView1<f64>, f64) -> Array1<f64>,
    C: Fn(ArrayView1<f64>, f64) -> Array1<f64>,
{
    params.validate()?;
    increments.ensure_shape(params.paths, params.steps)?;
    increments.ensure_dt(params.dt())?;

    let span = tracing::debug_span!(
        "integrate",
        scheme = scheme.name(),
        paths = params.paths,
        steps = params.steps
    );
    let _enter = span.enter();

    let grid = time_grid(params.horizon, params.steps)?;
    let dt = params.dt();
    let m = params.paths;

    let mut paths = Array2::zeros((m, params.steps + 1));
    let mut state = Array1::from_elem(m, params.x0);
    paths.column_mut(0).assign(&state);

    for i in 0..params.steps {
        let t = grid[i];
        let dw = increments.step(i);

        let a_values = drift(state.view(), t);
        let b_values = diffusion(state.view(), t);
        let a = align("drift", &a_values, m)?;
        let b = align("diffusion", &b_values, m)?;

        match &diffusion_prime {
            None => euler_update(&mut state, a, b, dw, dt, params.parallel),
            Some(prime) => {
                let bp_values = prime(state.view(), t);
                let bp = align("diffusion_prime", &bp_values, m)?;
                milstein_update(&mut state, a, b, bp, dw, dt, params.parallel);
            }
        }

        paths.column_mut(i + 1).assign(&state);
    }

    let non_finite = state.iter().filter(|x| !x.is_finite()).count();
    if non_finite > 0 {
        tracing::warn!(non_finite = non_finite, "ensemble contains non-finite terminal values");
    }
    tracing::debug!(terminal_mean = state.mean().unwrap_or(f64::NAN), "integration finished");

    Ok(Simulation { grid, paths })
}

/// View a coefficient result as one value per path, broadcasting length 1
fn align<'a>(
    function: &str,
    values: &'a Array1<f64>,
    paths: usize,
) -> SdeResult<ArrayView1<'a, f64>> {
    values.broadcast(paths).ok_or_else(|| SdeError::ShapeMismatch {
        function: function.to_string(),
        expected: format!("length {} (or 1)", paths),
        received: format!("length {}", values.len()),
    })
}

fn euler_update(
    state: &mut Array1<f64>,
    a: ArrayView1<f64>,
    b: ArrayView1<f64>,
    dw: ArrayView1<f64>,
    dt: f64,
    parallel: bool,
) {
    let zip = Zip::from(state).and(a).and(b).and(dw);
    let update = |x: &mut f64, &a: &f64, &b: &f64, &dw: &f64| {
        *x += a * dt + b * dw;
    };
    if parallel {
        zip.par_for_each(update);
    } else {
        zip.for_each(update);
    }
}

fn milstein_update(
    state: &mut Array1<f64>,
    a: ArrayView1<f64>,
    b: ArrayView1<f64>,
    bp: ArrayView1<f64>,
    dw: ArrayView1<f64>,
    dt: f64,
    parallel: bool,
) {
    let zip = Zip::from(state).and(a).and(b).and(bp).and(dw);
    // Same summation order as `euler_update`, so a zero correction is bit-identical
    let update = |x: &mut f64, &a: &f64, &b: &f64, &bp: &f64, &dw: &f64| {
        *x += a * dt + b * dw + 0.5 * b * bp * (dw * dw - dt);
    };
    if parallel {
        zip.par_for_each(update);
    } else {
        zip.for_each(update);
    }
}
