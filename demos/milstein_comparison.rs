// demos/milstein_comparison.rs
//! Euler-Maruyama vs Milstein strong convergence on GBM
//!
//! Usage: cargo run --example milstein_comparison [-- --paths M --seed SEED]
use sde_solver::analytics::convergence::{gbm_strong_convergence, ConvergenceConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut cfg = ConvergenceConfig::default();
    let mut i = 1;
    while i + 1 < args.len() {
        match args[i].as_str() {
            "--paths" => cfg.paths = args[i + 1].parse().unwrap_or(cfg.paths),
            "--seed" => cfg.seed = args[i + 1].parse().unwrap_or(cfg.seed),
            _ => {}
        }
        i += 2;
    }

    println!("============================================================");
    println!("Milstein vs Euler Comparison");
    println!("============================================================");
    println!(
        "GBM X0 = {}, μ = {}, σ = {}, T = {}, M = {}, seed = {}\n",
        cfg.x0, cfg.mu, cfg.sigma, cfg.horizon, cfg.paths, cfg.seed
    );

    let report = match gbm_strong_convergence(&cfg) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Convergence study failed: {}", e);
            std::process::exit(1);
        }
    };

    for p in &report.points {
        println!(
            "N = {:5} | Euler err: {:.6} | Milstein err: {:.6} | 1/√N: {:.6} | 1/N: {:.6}",
            p.steps,
            p.euler_error,
            p.milstein_error,
            1.0 / (p.steps as f64).sqrt(),
            1.0 / p.steps as f64
        );
    }
    println!(
        "\nEstimated strong order: Euler-Maruyama {:.3}, Milstein {:.3}",
        report.euler_order(),
        report.milstein_order()
    );
}
