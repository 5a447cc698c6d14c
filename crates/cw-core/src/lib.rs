//! cw-core: shared foundation for the Colebrook-White solver crates.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CwError, CwResult};
pub use numeric::*;
pub use units::*;
