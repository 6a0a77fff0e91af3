// demos/interest_rates.rs
//! Mean-reverting interest rates with an Ornstein-Uhlenbeck process
//!
//! dX(t) = θ(μ - X(t)) dt + σ dW(t)
use sde_solver::models::ou_process::OuProcess;
use sde_solver::rng;
use sde_solver::solvers::{simulate_model, Scheme, SimulationParams};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("============================================================");
    println!("Interest Rate Model: Ornstein-Uhlenbeck Process");
    println!("============================================================");

    let x0 = 0.0;
    let ou = OuProcess::new(1.0, 1.5, 0.3);
    let params = SimulationParams::new(x0, 5.0, 1000).with_paths(10);

    let sim = simulate_model(&ou, Scheme::EulerMaruyama, &params, &mut rng::seed_rng_from_u64(7))
        .expect("Valid parameters");

    println!("X0 = {}, θ = {}, μ = {}, σ = {}", x0, ou.theta, ou.mu, ou.sigma);
    for (p, path) in sim.paths().outer_iter().enumerate() {
        println!("path {:>2}: X(1) = {:>8.4}  X(T) = {:>8.4}", p + 1, path[200], path[1000]);
    }

    // Distribution at T from a larger ensemble
    let wide = params.with_paths(50_000).parallel(true);
    let sim = simulate_model(&ou, Scheme::EulerMaruyama, &wide, &mut rng::seed_rng_from_u64(7))
        .expect("Valid parameters");
    let summary = sim.summary();
    println!(
        "\nAt t = {}: mean {:.4} (exact {:.4}), std {:.4} (exact {:.4})",
        params.horizon,
        summary.mean,
        ou.exact_mean(x0, params.horizon),
        summary.std_dev,
        ou.exact_variance(params.horizon).sqrt()
    );
}
