//! Error types for solver operations.

use cw_core::CwError;
use thiserror::Error;

/// Errors that can occur while iterating toward a root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Domain violation at x = {x}: {reason}")]
    DomainViolation { x: f64, reason: String },

    #[error(
        "Non-convergent iteration: successive residuals are equal at step {iteration} (x = {x})"
    )]
    ZeroDenominator { iteration: usize, x: f64 },

    #[error("Did not converge after {iterations} iterations (last estimate {last}, last step {step})")]
    DidNotConverge {
        iterations: usize,
        last: f64,
        step: f64,
    },

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<CwError> for SolverError {
    fn from(e: CwError) -> Self {
        SolverError::ProblemSetup {
            what: e.to_string(),
        }
    }
}
