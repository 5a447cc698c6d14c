//! Error types for friction factor calculations.

use cw_core::CwError;
use cw_solver::SolverError;
use thiserror::Error;

/// Errors that can occur while computing a friction factor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Domain violation: friction factor {friction_factor} ({reason})")]
    DomainViolation { friction_factor: f64, reason: String },

    #[error(
        "Non-convergent iteration: equal successive residuals at step {iteration} (fD = {friction_factor})"
    )]
    NonConvergent {
        iteration: usize,
        friction_factor: f64,
    },

    #[error("Did not converge after {iterations} iterations (last fD = {last})")]
    DidNotConverge { iterations: usize, last: f64 },

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<CwError> for FlowError {
    fn from(e: CwError) -> Self {
        FlowError::InvalidInput {
            what: e.to_string(),
        }
    }
}

impl From<SolverError> for FlowError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::ProblemSetup { what } => FlowError::InvalidInput { what },
            SolverError::DomainViolation { x, reason } => FlowError::DomainViolation {
                friction_factor: x,
                reason,
            },
            SolverError::ZeroDenominator { iteration, x } => FlowError::NonConvergent {
                iteration,
                friction_factor: x,
            },
            SolverError::DidNotConverge {
                iterations, last, ..
            } => FlowError::DidNotConverge { iterations, last },
            SolverError::Numeric { what } => FlowError::Numeric { what },
        }
    }
}

impl From<FlowError> for SolverError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::DomainViolation {
                friction_factor,
                reason,
            } => SolverError::DomainViolation {
                x: friction_factor,
                reason,
            },
            other => SolverError::Numeric {
                what: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FlowError::DomainViolation {
            friction_factor: -3.0,
            reason: "must be positive".into(),
        };
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn solver_errors_keep_their_kind() {
        let zero: FlowError = SolverError::ZeroDenominator { iteration: 2, x: 0.03 }.into();
        assert!(matches!(zero, FlowError::NonConvergent { iteration: 2, .. }));

        let cap: FlowError = SolverError::DidNotConverge {
            iterations: 100,
            last: 0.4,
            step: 0.1,
        }
        .into();
        assert_eq!(
            cap,
            FlowError::DidNotConverge {
                iterations: 100,
                last: 0.4
            }
        );
    }

    #[test]
    fn domain_violation_round_trips_through_solver() {
        let flow = FlowError::DomainViolation {
            friction_factor: -1.0,
            reason: "test".into(),
        };
        let solver: SolverError = flow.clone().into();
        let back: FlowError = solver.into();
        assert_eq!(back, flow);
    }
}
