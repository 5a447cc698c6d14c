// cw-core/src/units.rs

use uom::si::f64::{
    DynamicViscosity as UomDynamicViscosity, Length as UomLength,
    MassDensity as UomMassDensity, Ratio as UomRatio, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Ratio = UomRatio;
pub type Velocity = UomVelocity;

#[inline]
pub fn kgpm3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pas(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _rho = kgpm3(1000.0);
        let _mu = pas(1e-3);
        let _d = m(0.05);
        let _u = mps(1.0);
        let _r = unitless(0.5);
    }

    #[test]
    fn millimeters_are_stored_in_meters() {
        assert!((mm(50.0).value - 0.05).abs() < 1e-15);
        assert!((mm(0.025).value - 2.5e-5).abs() < 1e-18);
    }
}
