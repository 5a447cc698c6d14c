//! Running a case through the friction factor solver.

use cw_case::Case;
use cw_flow::{FlowParams, FrictionConfig, FrictionSolution, PipeMaterial, solve_friction_factor};

use crate::case_service::compile_case;
use crate::error::AppResult;

/// What to solve.
#[derive(Debug, Clone, Copy)]
pub struct RunRequest<'a> {
    pub case: &'a Case,
    /// Replaces the case roughness when set
    pub material: Option<PipeMaterial>,
}

/// A finished solve together with the inputs that produced it.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub case_name: String,
    pub params: FlowParams,
    pub config: FrictionConfig,
    pub material: Option<PipeMaterial>,
    pub solution: FrictionSolution,
}

pub fn run(request: &RunRequest<'_>) -> AppResult<RunReport> {
    cw_case::validate_case(request.case).map_err(cw_case::CaseError::from)?;
    let (params, config) = compile_case(request.case, request.material);

    tracing::info!(
        case = request.case.display_name(),
        material = request.material.map(|m| m.name()),
        "solving friction factor"
    );
    let solution = solve_friction_factor(&params, &config)?;

    Ok(RunReport {
        case_name: request.case.display_name().to_string(),
        params,
        config,
        material: request.material,
        solution,
    })
}
