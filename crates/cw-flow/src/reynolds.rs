//! Reynolds number.

use crate::error::FlowResult;
use crate::params::FlowParams;
use cw_core::numeric::ensure_finite;

/// Re = ρ·u·d/μ
///
/// Caller guarantees `mu != 0`.
pub fn reynolds_number(rho: f64, u: f64, d: f64, mu: f64) -> f64 {
    rho * u * d / mu
}

/// Reynolds number for validated parameters.
pub fn reynolds(params: &FlowParams) -> FlowResult<f64> {
    params.validate()?;
    let re = reynolds_number(
        params.density.value,
        params.velocity.value,
        params.diameter.value,
        params.viscosity.value,
    );
    Ok(ensure_finite(re, "Reynolds number")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cw_core::units::pas;

    #[test]
    fn reference_pipe_reynolds() {
        let re = reynolds(&FlowParams::reference_pipe()).unwrap();
        assert!((re - 50_000.0).abs() < 1e-6);
    }

    #[test]
    fn scales_linearly_with_velocity() {
        let slow = reynolds_number(1000.0, 0.5, 0.05, 0.001);
        let fast = reynolds_number(1000.0, 1.0, 0.05, 0.001);
        assert!((fast - 2.0 * slow).abs() < 1e-9);
    }

    #[test]
    fn checked_variant_rejects_zero_viscosity() {
        let params = FlowParams {
            viscosity: pas(0.0),
            ..FlowParams::reference_pipe()
        };
        assert!(reynolds(&params).is_err());
    }
}
