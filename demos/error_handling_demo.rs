// demos/error_handling_demo.rs
use ndarray::{array, ArrayView1};
use sde_solver::rng;
use sde_solver::solvers::{coefficients, euler_maruyama, milstein, SimulationParams};

fn main() {
    println!("Error Handling Demo for sde-solver");
    println!("==================================\n");

    // Test 1: Zero steps
    println!("1. Testing zero steps...");
    match euler_maruyama(
        &SimulationParams::new(1.0, 1.0, 0),
        coefficients::constant(0.0),
        coefficients::constant(1.0),
        &mut rng::seed_rng_from_u64(42),
    ) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Negative horizon
    println!("\n2. Testing negative horizon...");
    match euler_maruyama(
        &SimulationParams::new(1.0, -1.0, 100),
        coefficients::constant(0.0),
        coefficients::constant(1.0),
        &mut rng::seed_rng_from_u64(42),
    ) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Diffusion derivative with the wrong length
    println!("\n3. Testing mis-shaped diffusion derivative...");
    match milstein(
        &SimulationParams::new(1.0, 1.0, 100).with_paths(3),
        coefficients::proportional(0.1),
        coefficients::proportional(0.2),
        |_x: ArrayView1<f64>, _t: f64| array![0.2, 0.2],
        &mut rng::seed_rng_from_u64(42),
    ) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 4: Unstable parameters are reported through the data
    println!("\n4. Testing explosive drift...");
    match euler_maruyama(
        &SimulationParams::new(10.0, 1.0, 50),
        |x: ArrayView1<f64>, _t: f64| x.mapv(|s| s.powi(8)),
        coefficients::constant(0.0),
        &mut rng::seed_rng_from_u64(42),
    ) {
        Ok(sim) => println!("   ✓ Completed, X(T) = {}", sim.terminal_values()[0]),
        Err(e) => println!("   Error: {}", e),
    }
}
