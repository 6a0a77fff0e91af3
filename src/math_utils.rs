// src/math_utils.rs
use ndarray::ArrayView1;
use statrs::statistics::Statistics;

/// Summary statistics of the terminal values X(T) of an ensemble
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalSummary {
    pub mean: f64,
    /// Sample standard deviation (NaN for a single path)
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

pub fn terminal_summary(values: ArrayView1<f64>) -> TerminalSummary {
    TerminalSummary {
        mean: Statistics::mean(values.iter()),
        std_dev: Statistics::std_dev(values.iter()),
        min: Statistics::min(values.iter()),
        max: Statistics::max(values.iter()),
    }
}

/// Least-squares slope of `ln(y)` against `ln(x)`.
///
/// For errors measured against step counts `N`, `-slope` is the empirical
/// convergence order. Returns NaN with fewer than two points.
pub fn log_log_slope(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return f64::NAN;
    }
    let lx: Vec<f64> = x[..n].iter().map(|v| v.ln()).collect();
    let ly: Vec<f64> = y[..n].iter().map(|v| v.ln()).collect();
    let mean_x = lx.iter().sum::<f64>() / n as f64;
    let mean_y = ly.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var = 0.0;
    for (a, b) in lx.iter().zip(&ly) {
        cov += (a - mean_x) * (b - mean_y);
        var += (a - mean_x) * (a - mean_x);
    }
    cov / var
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
