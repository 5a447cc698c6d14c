//! Colebrook-White residual.

use crate::error::{FlowError, FlowResult};
use crate::params::FlowParams;
use crate::reynolds::reynolds;
use cw_core::numeric::{ensure_non_negative, ensure_positive};

/// Colebrook-White equation written as a residual in the friction factor:
///
/// F(fD) = 1/√fD + 2·log10( ε/(3.7·d) + 2.51/(Re·√fD) )
///
/// The physical Darcy friction factor is the root F(fD) = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColebrookWhite {
    /// ε/(3.7·d)
    roughness_term: f64,
    reynolds: f64,
}

impl ColebrookWhite {
    pub fn new(roughness_m: f64, diameter_m: f64, reynolds: f64) -> FlowResult<Self> {
        ensure_non_negative(roughness_m, "roughness")?;
        ensure_positive(diameter_m, "diameter")?;
        ensure_positive(reynolds, "Reynolds number")?;
        Ok(Self {
            roughness_term: roughness_m / (3.7 * diameter_m),
            reynolds,
        })
    }

    pub fn from_params(params: &FlowParams) -> FlowResult<Self> {
        let re = reynolds(params)?;
        Self::new(params.roughness.value, params.diameter.value, re)
    }

    pub fn reynolds(&self) -> f64 {
        self.reynolds
    }

    /// Evaluate F(fD). Only defined for finite fD > 0.
    pub fn residual(&self, friction_factor: f64) -> FlowResult<f64> {
        if !friction_factor.is_finite() || friction_factor <= 0.0 {
            return Err(FlowError::DomainViolation {
                friction_factor,
                reason: "friction factor must be finite and positive".into(),
            });
        }

        let sqrt_f = friction_factor.sqrt();
        let value =
            1.0 / sqrt_f + 2.0 * (self.roughness_term + 2.51 / (self.reynolds * sqrt_f)).log10();

        if value.is_finite() {
            Ok(value)
        } else {
            Err(FlowError::DomainViolation {
                friction_factor,
                reason: "residual is not finite".into(),
            })
        }
    }
}
