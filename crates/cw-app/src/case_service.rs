//! Case loading, saving, validation and compilation to solver inputs.

use cw_case::Case;
use cw_core::units::{kgpm3, m, mps, pas};
use cw_flow::{FlowParams, FrictionConfig, PipeMaterial};
use std::path::Path;

use crate::error::{AppError, AppResult};

/// Load a case file (YAML or JSON by extension).
pub fn load_case(path: &Path) -> AppResult<Case> {
    let case = cw_case::load(path)?;
    tracing::info!(path = %path.display(), name = case.display_name(), "loaded case");
    Ok(case)
}

/// Load `path` if given, otherwise fall back to the reference pipe.
pub fn resolve_case(path: Option<&Path>) -> AppResult<Case> {
    match path {
        Some(path) => load_case(path),
        None => Ok(Case::reference()),
    }
}

pub fn save_case(path: &Path, case: &Case) -> AppResult<()> {
    cw_case::save(path, case)?;
    Ok(())
}

/// Validate the case fields and that the solver would accept them.
pub fn validate_case(case: &Case) -> AppResult<()> {
    cw_case::validate_case(case).map_err(|e| AppError::Validation(e.to_string()))?;
    let (params, config) = compile_case(case, None);
    params
        .validate()
        .and_then(|_| config.validate())
        .map_err(|e| AppError::Validation(e.to_string()))?;
    Ok(())
}

/// Turn a case into solver inputs, optionally replacing its roughness with a
/// catalog material.
pub fn compile_case(case: &Case, material: Option<PipeMaterial>) -> (FlowParams, FrictionConfig) {
    let roughness = material.map(|mat| mat.roughness()).unwrap_or(m(case.epsilon));
    let params = FlowParams::new(
        kgpm3(case.rho),
        pas(case.mu),
        m(case.d),
        roughness,
        mps(case.u),
    );
    let config = FrictionConfig {
        initial_guess: case.initial_guess,
        tolerance: case.tolerance,
        max_iterations: case.max_iterations,
    };
    (params, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_case_compiles_to_reference_pipe() {
        let (params, config) = compile_case(&Case::reference(), None);
        assert_eq!(params, FlowParams::reference_pipe());
        assert_eq!(config, FrictionConfig::default());
    }

    #[test]
    fn material_overrides_epsilon() {
        let (params, _) = compile_case(&Case::reference(), Some(PipeMaterial::GalvanizedIron));
        assert!((params.roughness.value - 1.5e-4).abs() < 1e-15);
    }

    #[test]
    fn degenerate_seeds_fail_validation() {
        let case = Case {
            initial_guess: 0.001,
            ..Case::reference()
        };
        assert!(matches!(validate_case(&case), Err(AppError::Validation(_))));
    }

    #[test]
    fn missing_path_resolves_to_reference() {
        assert_eq!(resolve_case(None).unwrap(), Case::reference());
    }
}
