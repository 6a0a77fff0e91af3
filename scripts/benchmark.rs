// scripts/benchmark.rs
use sde_solver::math_utils::Timer;
use sde_solver::models::gbm::Gbm;
use sde_solver::rng::RngFactory;
use sde_solver::solvers::{simulate_model, Scheme, SimulationParams};
use sde_solver::SdeResult;
use std::env;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_model: String,
    cpu_cores: usize,
    rayon_threads: usize,
}

impl SystemInfo {
    fn gather() -> Self {
        Self {
            os: env::consts::OS.to_string(),
            cpu_model: Self::get_cpu_model(),
            cpu_cores: num_cpus::get(),
            rayon_threads: rayon::current_num_threads(),
        }
    }

    fn get_cpu_model() -> String {
        #[cfg(target_os = "linux")]
        {
            std::fs::read_to_string("/proc/cpuinfo")
                .ok()
                .and_then(|content| {
                    content
                        .lines()
                        .find(|line| line.starts_with("model name"))
                        .and_then(|line| line.split(':').nth(1))
                        .map(|s| s.trim().to_string())
                })
                .unwrap_or_else(|| "Unknown CPU".to_string())
        }

        #[cfg(not(target_os = "linux"))]
        {
            "Unknown CPU".to_string()
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    scheme: Scheme,
    parallel: bool,
    paths: usize,
    steps: usize,
    time_ms: f64,
    throughput_steps_per_sec: f64,
    terminal_mean: f64,
    exact_mean: f64,
}

fn run_benchmarks(steps: usize, seed: u64) -> SdeResult<Vec<BenchmarkResult>> {
    let s0 = 100.0;
    let horizon = 1.0;
    let gbm = Gbm::new(0.05, 0.2);
    let exact_mean = s0 * (gbm.mu * horizon).exp();
    let factory = RngFactory::new(seed);

    let mut results = Vec::new();
    for &paths in &[1_000, 10_000, 100_000] {
        println!("Running benchmarks with {} paths...", paths);
        for scheme in [Scheme::EulerMaruyama, Scheme::Milstein] {
            for parallel in [false, true] {
                let params = SimulationParams::new(s0, horizon, steps)
                    .with_paths(paths)
                    .parallel(parallel);

                let mut rng = factory.create_std_rng(paths as u64);
                let mut timer = Timer::new();
                timer.start();
                let sim = simulate_model(&gbm, scheme, &params, &mut rng)?;
                let time_ms = timer.elapsed_ms();

                results.push(BenchmarkResult {
                    scheme,
                    parallel,
                    paths,
                    steps,
                    time_ms,
                    throughput_steps_per_sec: (paths * steps) as f64 / (time_ms / 1000.0),
                    terminal_mean: sim.summary().mean,
                    exact_mean,
                });
            }
        }
    }
    Ok(results)
}

fn print_results(results: &[BenchmarkResult], system_info: &SystemInfo) {
    println!("\n# sde-solver benchmark");
    println!(
        "# {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!(
        "# OS: {}, CPU: {}, cores: {}, rayon threads: {}",
        system_info.os, system_info.cpu_model, system_info.cpu_cores, system_info.rayon_threads
    );
    println!(
        "\n{:<16} {:>8} {:>8} {:>6} {:>12} {:>16} {:>12} {:>12}",
        "scheme", "parallel", "paths", "steps", "time_ms", "steps/sec", "mean S(T)", "exact"
    );
    for r in results {
        println!(
            "{:<16} {:>8} {:>8} {:>6} {:>12.2} {:>16.0} {:>12.4} {:>12.4}",
            r.scheme.name(),
            r.parallel,
            r.paths,
            r.steps,
            r.time_ms,
            r.throughput_steps_per_sec,
            r.terminal_mean,
            r.exact_mean
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let steps = args
        .iter()
        .position(|a| a == "--steps")
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
        .unwrap_or(252);

    let system_info = SystemInfo::gather();
    match run_benchmarks(steps, 42) {
        Ok(results) => print_results(&results, &system_info),
        Err(e) => {
            eprintln!("Benchmark failed: {}", e);
            std::process::exit(1);
        }
    }
}
