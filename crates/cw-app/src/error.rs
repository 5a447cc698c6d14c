//! Error types for the cw-app service layer.

use cw_flow::FlowError;
use std::path::PathBuf;

/// Application error type shared by every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Case(#[from] cw_case::CaseError),

    #[error("Case validation failed: {0}")]
    Validation(String),

    #[error("Solver error: {0}")]
    Flow(#[from] FlowError),

    #[error("Failed to render chart to {path}: {message}")]
    Plot { path: PathBuf, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Suggestion for the user when the iteration itself failed.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AppError::Flow(FlowError::DomainViolation {
                friction_factor, ..
            }) if *friction_factor <= 0.0 => Some(
                "the secant step overshot below zero: try a smaller initial guess such as 0.02 (smooth and plastic pipes sit low in the 0.001-0.1 range)",
            ),
            AppError::Flow(
                FlowError::DomainViolation { .. }
                | FlowError::NonConvergent { .. }
                | FlowError::DidNotConverge { .. },
            ) => Some(
                "amend the initial guess: friction factors are generally between 0.001 and 0.1, and 0.05 is a good starting point",
            ),
            _ => None,
        }
    }
}

/// Result type for cw-app operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convergence_failures_carry_hint() {
        let err = AppError::from(FlowError::DidNotConverge {
            iterations: 100,
            last: 3.0,
        });
        assert!(err.hint().unwrap().contains("initial guess"));
    }

    #[test]
    fn negative_overshoot_suggests_smaller_guess() {
        let err = AppError::from(FlowError::DomainViolation {
            friction_factor: -0.0026,
            reason: "friction factor must be finite and positive".into(),
        });
        let hint = err.hint().unwrap();
        assert!(hint.contains("smaller initial guess"));
        assert!(!hint.contains("0.05"));
    }

    #[test]
    fn input_errors_have_no_hint() {
        let err = AppError::from(FlowError::InvalidInput {
            what: "diameter".into(),
        });
        assert!(err.hint().is_none());
        assert!(AppError::InvalidInput("x".into()).hint().is_none());
    }
}
