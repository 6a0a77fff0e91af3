// demos/black_scholes.rs
//! Geometric Brownian motion (Black-Scholes stock model)
//!
//! dS(t) = μ S(t) dt + σ S(t) dW(t)
//!
//! Usage: cargo run --example black_scholes [-- --paths M --steps N --seed SEED]
use sde_solver::models::gbm::Gbm;
use sde_solver::rng;
use sde_solver::solvers::{simulate_model, Scheme, SimulationParams};
use sde_solver::{BrownianIncrements, SdeError};
use tracing_subscriber::EnvFilter;

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1).cloned())
}

fn exit_with(e: SdeError) -> ! {
    eprintln!("Simulation failed: {}", e);
    std::process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let paths = arg_value(&args, "--paths").and_then(|v| v.parse().ok()).unwrap_or(5);
    let steps = arg_value(&args, "--steps").and_then(|v| v.parse().ok()).unwrap_or(1000);
    let seed = arg_value(&args, "--seed").and_then(|v| v.parse().ok()).unwrap_or(42);

    println!("============================================================");
    println!("Black-Scholes Model: Geometric Brownian Motion");
    println!("============================================================");

    let s0 = 100.0;
    let gbm = Gbm::new(0.1, 0.2);
    let params = SimulationParams::new(s0, 1.0, steps).with_paths(paths);

    let sim = simulate_model(&gbm, Scheme::EulerMaruyama, &params, &mut rng::seed_rng_from_u64(seed))
        .unwrap_or_else(|e| exit_with(e));

    println!("S0 = {}, μ = {}, σ = {}, T = {}, N = {}, M = {}", s0, gbm.mu, gbm.sigma, params.horizon, steps, paths);
    println!("\n{:>6} {:>12} {:>12} {:>12}", "path", "S(T/2)", "S(T)", "min S(t)");
    for p in 0..paths {
        let path = sim.path(p);
        let min = path.iter().cloned().fold(f64::INFINITY, f64::min);
        println!("{:>6} {:>12.4} {:>12.4} {:>12.4}", p + 1, path[steps / 2], path[steps], min);
    }

    let summary = sim.summary();
    println!("\nTerminal mean: {:.4} (exact E[S(T)] = {:.4})", summary.mean, s0 * (gbm.mu * params.horizon).exp());

    // Path 1 against the closed form on identical noise
    let increments = BrownianIncrements::generate(&mut rng::seed_rng_from_u64(seed), 1, steps, params.dt());
    let single = SimulationParams::new(s0, params.horizon, steps);
    let numeric = sde_solver::solvers::simulate_model_with_increments(&gbm, Scheme::EulerMaruyama, &single, &increments)
        .unwrap_or_else(|e| exit_with(e));
    let exact = gbm
        .exact_paths(s0, numeric.grid(), &increments)
        .unwrap_or_else(|e| exit_with(e));
    println!(
        "Path 1: Euler-Maruyama S(T) = {:.4}, exact S(T) = {:.4}",
        numeric.terminal_values()[0],
        exact[[0, steps]]
    );
}
