//! Secant solver with iteration cap and iterate trace.

use crate::error::{SolverError, SolverResult};
use cw_core::numeric::{Real, ensure_finite, ensure_positive};

/// Second seed is the first scaled by this factor.
///
/// The secant update needs two distinct points. Placing the second one 0.1%
/// below the initial guess keeps both on the same side of the root for any
/// sensible guess while still giving a usable finite-difference slope.
pub const SEED_FACTOR: Real = 0.999;

/// Secant solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct SecantConfig {
    /// Convergence threshold on |x[i] - x[i-1]|
    pub tolerance: Real,
    /// Maximum number of secant updates
    pub max_iterations: usize,
}

impl Default for SecantConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-6,
            max_iterations: 100,
        }
    }
}

/// Secant iteration result.
#[derive(Debug, Clone)]
pub struct SecantResult {
    /// Converged estimate
    pub x: Real,
    /// Residual evaluated at `x`
    pub residual: Real,
    /// Number of secant updates taken
    pub iterations: usize,
    /// Every estimate in order, both seeds included
    pub trace: Vec<Real>,
}

/// Seed pair for an initial guess: `(x0, x0 * SEED_FACTOR)`.
pub fn near_seeds(x0: Real) -> (Real, Real) {
    (x0, x0 * SEED_FACTOR)
}

/// Find a root of `residual_fn` starting from two seeds.
///
/// Iterates `x[i+1] = x[i] - F(x[i]) * (x[i] - x[i-1]) / (F(x[i]) - F(x[i-1]))`
/// until `|x[i] - x[i-1]| <= tolerance`. Errors raised by the residual are
/// passed through unchanged, so a residual can report its own domain limits.
pub fn secant_solve<F>(
    seeds: (Real, Real),
    mut residual_fn: F,
    config: &SecantConfig,
) -> SolverResult<SecantResult>
where
    F: FnMut(Real) -> SolverResult<Real>,
{
    ensure_positive(config.tolerance, "tolerance")?;
    let (x0, x1) = seeds;
    ensure_finite(x0, "first seed")?;
    ensure_finite(x1, "second seed")?;

    let mut trace = vec![x0, x1];
    let mut f_prev = residual_fn(x0)?;
    let mut f_curr = residual_fn(x1)?;
    let mut iterations = 0;

    loop {
        let x_prev = trace[trace.len() - 2];
        let x_curr = trace[trace.len() - 1];
        let step = (x_curr - x_prev).abs();

        if step <= config.tolerance {
            tracing::debug!(iterations, x = x_curr, residual = f_curr, "secant converged");
            return Ok(SecantResult {
                x: x_curr,
                residual: f_curr,
                iterations,
                trace,
            });
        }

        if iterations >= config.max_iterations {
            return Err(SolverError::DidNotConverge {
                iterations,
                last: x_curr,
                step,
            });
        }

        let denom = f_curr - f_prev;
        if denom == 0.0 || !denom.is_finite() {
            return Err(SolverError::ZeroDenominator {
                iteration: iterations + 1,
                x: x_curr,
            });
        }

        let x_next = x_curr - f_curr * (x_curr - x_prev) / denom;
        if !x_next.is_finite() {
            return Err(SolverError::Numeric {
                what: format!("non-finite estimate at step {}", iterations + 1),
            });
        }

        trace.push(x_next);
        iterations += 1;
        tracing::trace!(iteration = iterations, x = x_next, step = (x_next - x_curr).abs());

        f_prev = f_curr;
        f_curr = residual_fn(x_next)?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_quadratic() {
        // Solve x^2 - 4 = 0 from the right
        let residual = |x: Real| -> SolverResult<Real> { Ok(x * x - 4.0) };
        let result = secant_solve(near_seeds(3.0), residual, &SecantConfig::default()).unwrap();

        assert!((result.x - 2.0).abs() < 1e-9);
        assert!(result.residual.abs() < 1e-9);
        assert_eq!(result.trace.len(), result.iterations + 2);
        assert_eq!(result.trace[0], 3.0);
        assert_eq!(result.trace[1], 3.0 * SEED_FACTOR);
    }

    #[test]
    fn seeds_already_within_tolerance() {
        let config = SecantConfig {
            tolerance: 1e-2,
            ..SecantConfig::default()
        };
        let result = secant_solve((1.0, 1.001), |x| Ok(x - 5.0), &config).unwrap();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.trace.len(), 2);
        assert_eq!(result.x, 1.001);
    }

    #[test]
    fn flat_residual_is_non_convergent() {
        let err = secant_solve(near_seeds(1.0), |_| Ok(5.0), &SecantConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            SolverError::ZeroDenominator {
                iteration: 1,
                x: SEED_FACTOR
            }
        );
    }

    #[test]
    fn rootless_residual_hits_iteration_cap() {
        let config = SecantConfig {
            tolerance: 1e-6,
            max_iterations: 5,
        };
        let err = secant_solve(near_seeds(1.0), |x| Ok(x * x + 1.0), &config).unwrap_err();
        match err {
            SolverError::DidNotConverge { iterations, .. } => assert_eq!(iterations, 5),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn residual_error_is_passed_through() {
        let residual = |x: Real| -> SolverResult<Real> {
            if x <= 0.0 {
                return Err(SolverError::DomainViolation {
                    x,
                    reason: "must be positive".into(),
                });
            }
            Ok(x.ln() + 10.0)
        };
        // Linear extrapolation from near 1.0 lands far below zero
        let err = secant_solve(near_seeds(1.0), residual, &SecantConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::DomainViolation { .. }));
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        let config = SecantConfig {
            tolerance: 0.0,
            max_iterations: 10,
        };
        let err = secant_solve(near_seeds(1.0), |x| Ok(x), &config).unwrap_err();
        assert!(matches!(err, SolverError::ProblemSetup { .. }));
    }

    #[test]
    fn rejects_non_finite_seed() {
        let err = secant_solve((Real::NAN, 1.0), |x| Ok(x), &SecantConfig::default())
            .unwrap_err();
        assert!(matches!(err, SolverError::ProblemSetup { .. }));
    }
}
