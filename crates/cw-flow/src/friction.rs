//! Darcy friction factor from the Colebrook-White equation.

use crate::colebrook::ColebrookWhite;
use crate::error::{FlowError, FlowResult};
use crate::params::FlowParams;
use crate::regime::{FlowRegime, RegimeWarning};
use cw_core::numeric::{ensure_positive, round_to_decimals};
use cw_solver::{SecantConfig, SolverError, near_seeds, secant_solve};
use std::ops::RangeInclusive;

/// Decimal places of the reported friction factor.
pub const REPORT_DECIMALS: u32 = 5;

/// Friction factors read off most Moody diagrams fall in this range.
pub const TYPICAL_FRICTION_FACTORS: RangeInclusive<f64> = 0.001..=0.1;

/// Iteration settings for the friction factor solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionConfig {
    /// First secant seed; the second is derived from it
    pub initial_guess: f64,
    /// Convergence threshold on successive estimates
    pub tolerance: f64,
    /// Maximum number of secant updates
    pub max_iterations: usize,
}

impl Default for FrictionConfig {
    fn default() -> Self {
        let secant = SecantConfig::default();
        Self {
            initial_guess: 0.05,
            tolerance: secant.tolerance,
            max_iterations: secant.max_iterations,
        }
    }
}

impl FrictionConfig {
    pub fn validate(&self) -> FlowResult<()> {
        ensure_positive(self.initial_guess, "initial guess")?;
        ensure_positive(self.tolerance, "tolerance")?;
        if self.max_iterations == 0 {
            return Err(FlowError::InvalidInput {
                what: "max_iterations must be at least 1".into(),
            });
        }

        let (x0, x1) = near_seeds(self.initial_guess);
        if (x0 - x1).abs() <= self.tolerance {
            return Err(FlowError::InvalidInput {
                what: format!(
                    "initial guess {} is too small for tolerance {}: the secant seeds already agree within tolerance",
                    self.initial_guess, self.tolerance
                ),
            });
        }
        Ok(())
    }

    fn secant(&self) -> SecantConfig {
        SecantConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

/// Converged friction factor with everything needed to report on it.
#[derive(Debug, Clone)]
pub struct FrictionSolution {
    /// Converged Darcy friction factor (unrounded)
    pub friction_factor: f64,
    /// Colebrook-White residual at `friction_factor`
    pub residual: f64,
    /// Number of secant updates taken
    pub iterations: usize,
    /// All estimates in order, both seeds included
    pub trace: Vec<f64>,
    pub reynolds: f64,
    pub regime: FlowRegime,
    /// Set when the equation was applied below its validity range
    pub regime_warning: Option<RegimeWarning>,
}

impl FrictionSolution {
    /// Friction factor rounded to `REPORT_DECIMALS` places.
    pub fn rounded(&self) -> f64 {
        round_to_decimals(self.friction_factor, REPORT_DECIMALS)
    }

    /// `(iteration index, estimate)` pairs for plotting.
    pub fn iteration_series(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.trace.iter().copied().enumerate()
    }
}

/// Solve the Colebrook-White equation for the Darcy friction factor.
///
/// A Reynolds number below the validity limit is reported on the solution and
/// logged, but does not stop the solve.
pub fn solve_friction_factor(
    params: &FlowParams,
    config: &FrictionConfig,
) -> FlowResult<FrictionSolution> {
    config.validate()?;
    let equation = ColebrookWhite::from_params(params)?;
    let re = equation.reynolds();

    let regime_warning = RegimeWarning::check(re);
    if let Some(warning) = &regime_warning {
        tracing::warn!("{warning}");
    }
    if !TYPICAL_FRICTION_FACTORS.contains(&config.initial_guess) {
        tracing::warn!(
            initial_guess = config.initial_guess,
            "initial guess is outside the typical friction factor range {:?}; the secant method may not converge",
            TYPICAL_FRICTION_FACTORS
        );
    }

    let result = secant_solve(
        near_seeds(config.initial_guess),
        |f| equation.residual(f).map_err(SolverError::from),
        &config.secant(),
    )?;

    tracing::debug!(
        reynolds = re,
        friction_factor = result.x,
        iterations = result.iterations,
        "friction factor converged"
    );

    Ok(FrictionSolution {
        friction_factor: result.x,
        residual: result.residual,
        iterations: result.iterations,
        trace: result.trace,
        reynolds: re,
        regime: FlowRegime::classify(re),
        regime_warning,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        FrictionConfig::default().validate().unwrap();
    }

    #[test]
    fn degenerate_seeds_are_rejected() {
        let config = FrictionConfig {
            initial_guess: 0.001,
            ..FrictionConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("too small"));
    }

    #[test]
    fn zero_iteration_cap_is_rejected() {
        let config = FrictionConfig {
            max_iterations: 0,
            ..FrictionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn series_starts_at_zero_and_covers_trace() {
        let solution = solve_friction_factor(
            &FlowParams::reference_pipe(),
            &FrictionConfig::default(),
        )
        .unwrap();
        let series: Vec<_> = solution.iteration_series().collect();
        assert_eq!(series.len(), solution.trace.len());
        assert_eq!(series[0], (0, 0.05));
        assert_eq!(series.last().unwrap().0, solution.iterations + 1);
    }
}
