// tests/solver_convergence_test.rs
use sde_solver::analytics::convergence::{gbm_strong_convergence, ConvergenceConfig};
use sde_solver::brownian::BrownianIncrements;
use sde_solver::models::gbm::Gbm;
use sde_solver::models::ou_process::OuProcess;
use sde_solver::rng;
use sde_solver::solvers::{simulate_model, simulate_model_with_increments, Scheme, SimulationParams};

#[test]
fn test_gbm_strong_convergence_orders() {
    let report = gbm_strong_convergence(&ConvergenceConfig::default()).expect("Valid configuration");

    println!("\nGBM strong convergence:");
    for p in &report.points {
        println!(
            "N = {:5} | Euler err: {:.6e} | Milstein err: {:.6e}",
            p.steps, p.euler_error, p.milstein_error
        );
    }
    let euler_order = report.euler_order();
    let milstein_order = report.milstein_order();
    println!("Euler order: {:.3}, Milstein order: {:.3}", euler_order, milstein_order);

    assert!(
        euler_order > 0.35 && euler_order < 0.65,
        "Euler-Maruyama strong order not close to 0.5: {}",
        euler_order
    );
    assert!(
        milstein_order > 0.8 && milstein_order < 1.25,
        "Milstein strong order not close to 1.0: {}",
        milstein_order
    );

    // Errors shrink monotonically with N for both schemes
    for w in report.points.windows(2) {
        assert!(w[1].euler_error < w[0].euler_error);
        assert!(w[1].milstein_error < w[0].milstein_error);
    }

    // Milstein is at least as accurate on the fine end of the sweep
    for p in report.points.iter().rev().take(3) {
        assert!(
            p.milstein_error <= p.euler_error,
            "Milstein error {} exceeds Euler error {} at N = {}",
            p.milstein_error,
            p.euler_error,
            p.steps
        );
    }
}

#[test]
fn test_milstein_tracks_exact_gbm_paths() {
    let gbm = Gbm::new(0.1, 0.2);
    let params = SimulationParams::new(100.0, 1.0, 1000).with_paths(5);
    let increments = BrownianIncrements::generate(
        &mut rng::seed_rng_from_u64(42),
        params.paths,
        params.steps,
        params.dt(),
    );

    let sim = simulate_model_with_increments(&gbm, Scheme::Milstein, &params, &increments)
        .expect("Valid parameters");
    let exact = gbm
        .exact_paths(params.x0, sim.grid(), &increments)
        .expect("Grid matches increments");

    let max_error = (&sim.paths() - &exact)
        .iter()
        .fold(0.0f64, |acc, e| acc.max(e.abs()));
    assert!(max_error < 0.05, "Milstein path deviates from exact GBM by {}", max_error);
}

#[test]
fn test_ou_weak_convergence() {
    let ou = OuProcess::new(0.5, 0.1, 0.2);
    let x0 = 100.0;
    let t_end = 1.0;
    let exact_mean = ou.exact_mean(x0, t_end);

    for scheme in [Scheme::EulerMaruyama, Scheme::Milstein] {
        let mut errors = Vec::new();
        for steps in [10, 20, 40, 80] {
            let params = SimulationParams::new(x0, t_end, steps).with_paths(20_000);
            let sim = simulate_model(&ou, scheme, &params, &mut rng::seed_rng_from_u64(42))
                .expect("Valid parameters");
            errors.push((sim.summary().mean - exact_mean).abs());
        }

        // The mean bias is deterministic (1 - θΔt)^N vs e^{-θT}; noise is ~1e-3
        for i in 0..(errors.len() - 1) {
            assert!(
                errors[i] > errors[i + 1],
                "{} did not converge (weak) as expected at step {}: {:?}",
                scheme,
                i,
                errors
            );
        }
        assert!(
            *errors.last().unwrap() < 0.2,
            "{} final absolute error ({}) is too high for weak convergence",
            scheme,
            errors.last().unwrap()
        );
    }
}
