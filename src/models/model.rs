// src/models/model.rs
/// Scalar SDE `dX = a(X, t) dt + b(X, t) dW` described by its coefficients.
///
/// Used with [`simulate_model`](crate::solvers::simulate_model), which lifts
/// the scalar functions over the whole path ensemble.
pub trait SDEModel {
    fn drift(&self, s: f64, t: f64) -> f64;
    fn diffusion(&self, s: f64, t: f64) -> f64;
    /// `∂b/∂x`, needed by the Milstein scheme
    fn diffusion_derivative(&self, s: f64, t: f64) -> f64;
}
