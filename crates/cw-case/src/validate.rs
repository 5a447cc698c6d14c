//! Case validation logic.

use crate::schema::Case;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_case(case: &Case) -> Result<(), ValidationError> {
    positive("rho", case.rho)?;
    positive("mu", case.mu)?;
    positive("d", case.d)?;
    non_negative("epsilon", case.epsilon)?;
    positive("u", case.u)?;
    positive("initial_guess", case.initial_guess)?;
    positive("tolerance", case.tolerance)?;

    if case.max_iterations == 0 {
        return Err(invalid(
            "max_iterations",
            case.max_iterations,
            "must be at least 1",
        ));
    }

    if case.epsilon >= case.d {
        return Err(invalid(
            "epsilon",
            case.epsilon,
            "roughness must be smaller than the diameter",
        ));
    }

    Ok(())
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if cw_core::ensure_positive(value, "case field").is_err() {
        return Err(invalid(field, value, "must be finite and positive"));
    }
    Ok(())
}

fn non_negative(field: &str, value: f64) -> Result<(), ValidationError> {
    if cw_core::ensure_non_negative(value, "case field").is_err() {
        return Err(invalid(field, value, "must be finite and non-negative"));
    }
    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
