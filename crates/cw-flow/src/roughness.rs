//! Typical absolute roughness of common pipe materials.
//!
//! Values are the usual design figures for new, clean pipe. Aged or scaled
//! pipe can be several times rougher.

use cw_core::units::{Length, mm};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeMaterial {
    Smooth,
    DrawnTubing,
    Pvc,
    StainlessSteel,
    CommercialSteel,
    GalvanizedIron,
    CastIron,
    Concrete,
    RivetedSteel,
}

impl PipeMaterial {
    pub const ALL: [PipeMaterial; 9] = [
        PipeMaterial::Smooth,
        PipeMaterial::DrawnTubing,
        PipeMaterial::Pvc,
        PipeMaterial::StainlessSteel,
        PipeMaterial::CommercialSteel,
        PipeMaterial::GalvanizedIron,
        PipeMaterial::CastIron,
        PipeMaterial::Concrete,
        PipeMaterial::RivetedSteel,
    ];

    /// Identifier accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            PipeMaterial::Smooth => "smooth",
            PipeMaterial::DrawnTubing => "drawn_tubing",
            PipeMaterial::Pvc => "pvc",
            PipeMaterial::StainlessSteel => "stainless_steel",
            PipeMaterial::CommercialSteel => "commercial_steel",
            PipeMaterial::GalvanizedIron => "galvanized_iron",
            PipeMaterial::CastIron => "cast_iron",
            PipeMaterial::Concrete => "concrete",
            PipeMaterial::RivetedSteel => "riveted_steel",
        }
    }

    pub fn roughness(self) -> Length {
        let eps_mm = match self {
            PipeMaterial::Smooth => 0.0,
            PipeMaterial::DrawnTubing => 0.0015,
            PipeMaterial::Pvc => 0.0015,
            PipeMaterial::StainlessSteel => 0.015,
            PipeMaterial::CommercialSteel => 0.045,
            PipeMaterial::GalvanizedIron => 0.15,
            PipeMaterial::CastIron => 0.26,
            PipeMaterial::Concrete => 1.0,
            PipeMaterial::RivetedSteel => 3.0,
        };
        mm(eps_mm)
    }
}

impl fmt::Display for PipeMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PipeMaterial {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        PipeMaterial::ALL
            .into_iter()
            .find(|material| material.name() == key)
            .ok_or_else(|| format!("unknown pipe material '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for material in PipeMaterial::ALL {
            assert_eq!(material.name().parse::<PipeMaterial>().unwrap(), material);
        }
    }

    #[test]
    fn parse_is_lenient_about_separators() {
        assert_eq!(
            "Commercial-Steel".parse::<PipeMaterial>().unwrap(),
            PipeMaterial::CommercialSteel
        );
        assert_eq!(
            "cast iron".parse::<PipeMaterial>().unwrap(),
            PipeMaterial::CastIron
        );
        assert!("unobtainium".parse::<PipeMaterial>().is_err());
    }

    #[test]
    fn catalog_is_ordered_by_roughness() {
        let values: Vec<f64> = PipeMaterial::ALL.iter().map(|m| m.roughness().value).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!((PipeMaterial::CommercialSteel.roughness().value - 4.5e-5).abs() < 1e-15);
    }
}
