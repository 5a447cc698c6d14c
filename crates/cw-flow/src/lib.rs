//! Darcy friction factor for turbulent pipe flow.
//!
//! The Colebrook-White equation is implicit in the friction factor, so it is
//! solved as a root of its residual with the secant method from `cw-solver`.

pub mod colebrook;
pub mod error;
pub mod friction;
pub mod params;
pub mod regime;
pub mod reynolds;
pub mod roughness;

pub use colebrook::ColebrookWhite;
pub use error::{FlowError, FlowResult};
pub use friction::{FrictionConfig, FrictionSolution, REPORT_DECIMALS, solve_friction_factor};
pub use params::FlowParams;
pub use regime::{FlowRegime, RegimeWarning, TURBULENT_RE_MIN};
pub use reynolds::{reynolds, reynolds_number};
pub use roughness::PipeMaterial;
