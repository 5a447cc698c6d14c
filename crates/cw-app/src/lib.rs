//! Shared application service layer for the friction factor solver.
//!
//! Turns case files into solver inputs, runs the solve, and produces the
//! console report, CSV series and convergence chart.

pub mod case_service;
pub mod error;
pub mod plot;
pub mod report;
pub mod run_service;

// Re-export key types for convenience
pub use case_service::{compile_case, load_case, resolve_case, save_case, validate_case};
pub use error::{AppError, AppResult};
pub use plot::render_convergence_chart;
pub use report::{result_lines, series_csv, summary_lines};
pub use run_service::{RunReport, RunRequest, run};
