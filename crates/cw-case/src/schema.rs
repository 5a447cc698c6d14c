//! Case file schema.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// One set of solver inputs, in SI units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Case {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Density [kg/m3]
    pub rho: f64,
    /// Dynamic viscosity [Pa s]
    pub mu: f64,
    /// Inner diameter [m]
    pub d: f64,
    /// Absolute roughness [m]
    pub epsilon: f64,
    /// Mean velocity [m/s]
    pub u: f64,
    /// Initial friction factor guess [-]
    pub initial_guess: f64,
    /// Convergence tolerance on successive estimates [-]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

impl Case {
    /// Water at 1 m/s through a 50 mm pipe with 0.025 mm roughness.
    pub fn reference() -> Self {
        Self {
            name: Some("Reference pipe".to_string()),
            rho: 1000.0,
            mu: 0.001,
            d: 0.05,
            epsilon: 0.000_025,
            u: 1.0,
            initial_guess: 0.05,
            tolerance: 1e-6,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed case")
    }
}

impl Default for Case {
    fn default() -> Self {
        Self::reference()
    }
}
