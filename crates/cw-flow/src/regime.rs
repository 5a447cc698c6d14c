//! Flow regime classification and the Colebrook-White validity warning.

use std::fmt;

/// Below this Reynolds number the Colebrook-White equation is not valid.
pub const TURBULENT_RE_MIN: f64 = 4000.0;

/// Upper bound of fully laminar pipe flow.
pub const LAMINAR_RE_MAX: f64 = 2300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    pub fn classify(reynolds: f64) -> Self {
        if reynolds < LAMINAR_RE_MAX {
            FlowRegime::Laminar
        } else if reynolds < TURBULENT_RE_MIN {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FlowRegime::Laminar => "laminar",
            FlowRegime::Transitional => "transitional",
            FlowRegime::Turbulent => "turbulent",
        }
    }
}

/// Advisory raised when the equation is applied outside its validity range.
///
/// The computation still proceeds; whether the result is usable is up to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeWarning {
    pub reynolds: f64,
    pub regime: FlowRegime,
}

impl RegimeWarning {
    /// `Some` iff `reynolds < TURBULENT_RE_MIN`.
    pub fn check(reynolds: f64) -> Option<Self> {
        (reynolds < TURBULENT_RE_MIN).then(|| RegimeWarning {
            reynolds,
            regime: FlowRegime::classify(reynolds),
        })
    }
}

impl fmt::Display for RegimeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reynolds number {} is below the Colebrook-White validity limit of {} ({} flow); consider a different correlation",
            self.reynolds,
            TURBULENT_RE_MIN,
            self.regime.label()
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn warning_iff_below_limit(re in 1.0_f64..1.0e7) {
            prop_assert_eq!(RegimeWarning::check(re).is_some(), re < TURBULENT_RE_MIN);
        }
    }
}
