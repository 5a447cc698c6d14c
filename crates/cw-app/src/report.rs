//! Text and CSV output for a finished run.

use cw_flow::{FrictionSolution, REPORT_DECIMALS};

use crate::run_service::RunReport;

/// The two headline lines: converged value and iteration count.
pub fn result_lines(solution: &FrictionSolution) -> [String; 2] {
    [
        format!(
            "Result is fD = {:.*}",
            REPORT_DECIMALS as usize,
            solution.rounded()
        ),
        format!("After {} iterations.", solution.iterations),
    ]
}

/// Inputs and diagnostics around the result.
pub fn summary_lines(report: &RunReport) -> Vec<String> {
    let params = &report.params;
    let solution = &report.solution;

    let mut lines = vec![
        format!("Case: {}", report.case_name),
        format!("  Density:   {} kg/m3", params.density.value),
        format!("  Viscosity: {} Pa s", params.viscosity.value),
        format!("  Diameter:  {} m", params.diameter.value),
        format!("  Velocity:  {} m/s", params.velocity.value),
    ];
    match report.material {
        Some(material) => lines.push(format!(
            "  Roughness: {} m ({})",
            params.roughness.value, material
        )),
        None => lines.push(format!("  Roughness: {} m", params.roughness.value)),
    }
    lines.push(format!(
        "  Relative roughness: {:.3e}",
        params.relative_roughness().value
    ));
    lines.push(format!(
        "  Reynolds number: {:.0} ({})",
        solution.reynolds,
        solution.regime.label()
    ));
    lines.push(format!(
        "  Initial guess: {}  tolerance: {:e}",
        report.config.initial_guess, report.config.tolerance
    ));
    lines.push(format!("  Final residual: {:.3e}", solution.residual));
    lines
}

/// Iterate sequence as `iteration,friction_factor` CSV.
pub fn series_csv(solution: &FrictionSolution) -> String {
    let mut csv = String::from("iteration,friction_factor\n");
    for (i, f) in solution.iteration_series() {
        csv.push_str(&format!("{},{}\n", i, f));
    }
    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use cw_flow::{FlowParams, FrictionConfig, solve_friction_factor};

    fn reference_solution() -> FrictionSolution {
        solve_friction_factor(&FlowParams::reference_pipe(), &FrictionConfig::default()).unwrap()
    }

    #[test]
    fn result_lines_format() {
        let solution = reference_solution();
        let [value, count] = result_lines(&solution);
        assert_eq!(value, "Result is fD = 0.02256");
        assert_eq!(count, format!("After {} iterations.", solution.iterations));
    }

    #[test]
    fn csv_has_header_and_one_row_per_estimate() {
        let solution = reference_solution();
        let csv = series_csv(&solution);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "iteration,friction_factor");
        assert_eq!(lines.len(), solution.trace.len() + 1);
        assert_eq!(lines[1], "0,0.05");
    }
}
