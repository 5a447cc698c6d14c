//! Scalar root finding for implicit correlations.
//!
//! The secant method needs no derivative, only two starting points and a
//! residual closure. The full iterate trace is kept so callers can report and
//! plot convergence.

pub mod error;
pub mod secant;

pub use error::{SolverError, SolverResult};
pub use secant::{SEED_FACTOR, SecantConfig, SecantResult, near_seeds, secant_solve};
