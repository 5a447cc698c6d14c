//! Fluid and pipe parameters.

use crate::error::{FlowError, FlowResult};
use cw_core::numeric::{ensure_non_negative, ensure_positive};
use cw_core::units::{Density, DynVisc, Length, Ratio, Velocity, kgpm3, m, mps, pas, unitless};

/// Immutable fluid and pipe inputs for one friction factor calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParams {
    /// Fluid density
    pub density: Density,
    /// Dynamic viscosity
    pub viscosity: DynVisc,
    /// Pipe inner diameter
    pub diameter: Length,
    /// Absolute surface roughness
    pub roughness: Length,
    /// Mean flow velocity
    pub velocity: Velocity,
}

impl FlowParams {
    pub fn new(
        density: Density,
        viscosity: DynVisc,
        diameter: Length,
        roughness: Length,
        velocity: Velocity,
    ) -> Self {
        Self {
            density,
            viscosity,
            diameter,
            roughness,
            velocity,
        }
    }

    /// Water at 1 m/s in a 50 mm pipe with 0.025 mm roughness.
    pub fn reference_pipe() -> Self {
        Self::new(kgpm3(1000.0), pas(0.001), m(0.05), m(0.000_025), mps(1.0))
    }

    /// Same fluid and flow, different wall roughness.
    pub fn with_roughness(self, roughness: Length) -> Self {
        Self { roughness, ..self }
    }

    /// ε/d
    pub fn relative_roughness(&self) -> Ratio {
        unitless(self.roughness.value / self.diameter.value)
    }

    /// Check that every parameter is physical.
    ///
    /// Roughness may be zero (hydraulically smooth) but must stay below the
    /// diameter; everything else must be strictly positive.
    pub fn validate(&self) -> FlowResult<()> {
        ensure_positive(self.density.value, "density")?;
        ensure_positive(self.viscosity.value, "viscosity")?;
        ensure_positive(self.diameter.value, "diameter")?;
        ensure_non_negative(self.roughness.value, "roughness")?;
        ensure_positive(self.velocity.value, "velocity")?;
        if self.roughness.value >= self.diameter.value {
            return Err(FlowError::InvalidInput {
                what: format!(
                    "roughness {} m must be smaller than the diameter {} m",
                    self.roughness.value, self.diameter.value
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roughness::PipeMaterial;

    #[test]
    fn reference_pipe_is_valid() {
        let params = FlowParams::reference_pipe();
        params.validate().unwrap();
        assert!((params.relative_roughness().value - 0.0005).abs() < 1e-15);
    }

    #[test]
    fn smooth_pipe_is_valid() {
        let params = FlowParams::reference_pipe().with_roughness(m(0.0));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_viscosity_is_rejected() {
        let params = FlowParams {
            viscosity: pas(0.0),
            ..FlowParams::reference_pipe()
        };
        let err = params.validate().unwrap_err();
        assert!(matches!(err, FlowError::InvalidInput { .. }));
        assert!(err.to_string().contains("viscosity"));
    }

    #[test]
    fn roughness_at_or_above_diameter_is_rejected() {
        let params = FlowParams {
            diameter: m(0.002),
            ..FlowParams::reference_pipe()
        }
        .with_roughness(PipeMaterial::RivetedSteel.roughness());
        let err = params.validate().unwrap_err();
        assert!(matches!(err, FlowError::InvalidInput { .. }));
        assert!(err.to_string().contains("smaller than the diameter"));
    }

    #[test]
    fn negative_roughness_is_rejected() {
        let params = FlowParams::reference_pipe().with_roughness(m(-1e-6));
        assert!(params.validate().is_err());
    }
}
