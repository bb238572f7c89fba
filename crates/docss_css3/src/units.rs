//! Units that can follow a number, and coercion of expressions into plain numbers, points,
//! twips and EMUs.
use crate::node::{Expression, Sign, Term, Value};
use cow_utils::CowUtils;
use docss_shared::errors::{CssError, CssResult};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Twips per point
const TWIPS_PER_POINT: f64 = 20.0;

/// English metric units per absolute unit
const EMU_PER_POINT: f64 = 12_700.0;
const EMU_PER_PIXEL: f64 = 9_525.0;
const EMU_PER_PICA: f64 = 152_400.0;
const EMU_PER_INCH: f64 = 914_400.0;
const EMU_PER_CM: f64 = 360_000.0;
const EMU_PER_MM: f64 = 36_000.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    #[default]
    None,
    Percent,
    Em,
    Ex,
    Px,
    Gd,
    Rem,
    Vw,
    Vh,
    Vm,
    Ch,
    Mm,
    Cm,
    In,
    Pt,
    Pc,
    Deg,
    Grad,
    Rad,
    Turn,
    Ms,
    S,
    Hz,
    KHz,
}

impl Unit {
    /// Returns the unit for the given suffix. Matching is case-insensitive. Percent is not
    /// matched here since it is a separate token.
    pub fn from_name(name: &str) -> Option<Unit> {
        let unit = match name.cow_to_ascii_lowercase().as_ref() {
            "em" => Unit::Em,
            "ex" => Unit::Ex,
            "px" => Unit::Px,
            "gd" => Unit::Gd,
            "rem" => Unit::Rem,
            "vw" => Unit::Vw,
            "vh" => Unit::Vh,
            "vm" => Unit::Vm,
            "ch" => Unit::Ch,
            "mm" => Unit::Mm,
            "cm" => Unit::Cm,
            "in" => Unit::In,
            "pt" => Unit::Pt,
            "pc" => Unit::Pc,
            "deg" => Unit::Deg,
            "grad" => Unit::Grad,
            "rad" => Unit::Rad,
            "turn" => Unit::Turn,
            "ms" => Unit::Ms,
            "s" => Unit::S,
            "hz" => Unit::Hz,
            "khz" => Unit::KHz,
            _ => return None,
        };

        Some(unit)
    }

    /// Suffix as rendered after the number
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Percent => "%",
            Unit::Em => "em",
            Unit::Ex => "ex",
            Unit::Px => "px",
            Unit::Gd => "gd",
            Unit::Rem => "rem",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Vm => "vm",
            Unit::Ch => "ch",
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Deg => "deg",
            Unit::Grad => "grad",
            Unit::Rad => "rad",
            Unit::Turn => "turn",
            Unit::Ms => "ms",
            Unit::S => "s",
            Unit::Hz => "Hz",
            Unit::KHz => "kHz",
        }
    }

    /// Number of EMUs in one of this unit, for absolute lengths only
    fn emus(&self) -> Option<f64> {
        match self {
            Unit::Pt => Some(EMU_PER_POINT),
            Unit::Px => Some(EMU_PER_PIXEL),
            Unit::Pc => Some(EMU_PER_PICA),
            Unit::In => Some(EMU_PER_INCH),
            Unit::Cm => Some(EMU_PER_CM),
            Unit::Mm => Some(EMU_PER_MM),
            _ => None,
        }
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Term {
    /// Returns the numeric value of a number term, with the sign applied
    pub fn to_number(&self) -> CssResult<f64> {
        let Value::Number { sign, value, .. } = &self.value else {
            return Err(CssError::semantic(&format!("'{}' is not a number", self)));
        };

        let n = value
            .parse::<f64>()
            .map_err(|_| CssError::semantic(&format!("'{}' is not a number", self)))?;

        Ok(match sign {
            Some(Sign::Minus) => -n,
            _ => n,
        })
    }
}

impl Expression {
    /// Returns the first term as a plain number. The unit is ignored.
    pub fn to_number(&self) -> CssResult<f64> {
        match self.terms.first() {
            Some(term) => term.to_number(),
            None => Err(CssError::semantic("empty expression is not a number")),
        }
    }

    /// Returns the first term as a number of points. The unit is ignored, the value is taken
    /// as written.
    pub fn to_points(&self) -> CssResult<f64> {
        self.to_number()
    }

    /// Returns the number of twips for a single point value (`12pt` is 240 twips). Any other
    /// expression results in 0.
    pub fn to_twips(&self) -> i64 {
        match self.single_number() {
            Some((n, Unit::Pt)) => (n * TWIPS_PER_POINT).round() as i64,
            _ => 0,
        }
    }

    /// Returns the number of EMUs for a single absolute length (pt, px, pc, in, cm, mm). Any
    /// other expression results in 0.
    pub fn to_emu(&self) -> i64 {
        match self.single_number() {
            Some((n, unit)) => unit.emus().map_or(0, |emus| (n * emus).round() as i64),
            None => 0,
        }
    }

    fn single_number(&self) -> Option<(f64, Unit)> {
        let [term] = self.terms.as_slice() else {
            return None;
        };
        let Value::Number { unit, .. } = &term.value else {
            return None;
        };

        term.to_number().ok().map(|n| (n, *unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn number(sign: Option<Sign>, value: &str, unit: Unit) -> Term {
        Term::new(Value::Number {
            sign,
            value: value.to_string(),
            unit,
        })
    }

    fn expr(terms: Vec<Term>) -> Expression {
        Expression { terms }
    }

    #[test_case("px", Some(Unit::Px) ; "lowercase")]
    #[test_case("PX", Some(Unit::Px) ; "uppercase")]
    #[test_case("Pt", Some(Unit::Pt) ; "mixed case")]
    #[test_case("khz", Some(Unit::KHz) ; "kilohertz")]
    #[test_case("Hz", Some(Unit::Hz) ; "hertz")]
    #[test_case("s", Some(Unit::S) ; "seconds")]
    #[test_case("turn", Some(Unit::Turn) ; "turns")]
    #[test_case("%", None ; "percent")]
    #[test_case("foo", None ; "unknown")]
    #[test_case("", None ; "empty")]
    fn unit_names(name: &str, expected: Option<Unit>) {
        assert_eq!(Unit::from_name(name), expected);
    }

    #[test]
    fn unit_rendering() {
        assert_eq!(Unit::Percent.to_string(), "%");
        assert_eq!(Unit::Hz.to_string(), "Hz");
        assert_eq!(Unit::KHz.to_string(), "kHz");
        assert_eq!(Unit::Em.to_string(), "em");
        assert_eq!(Unit::None.to_string(), "");
    }

    #[test]
    fn numbers() {
        assert_eq!(expr(vec![number(None, "12", Unit::Pt)]).to_number().unwrap(), 12.0);
        assert_eq!(
            expr(vec![number(Some(Sign::Minus), "1.5", Unit::Em)])
                .to_points()
                .unwrap(),
            -1.5
        );
        assert_eq!(
            expr(vec![number(None, ".5", Unit::None), number(None, "3", Unit::Px)])
                .to_number()
                .unwrap(),
            0.5
        );

        let err = expr(vec![Term::new(Value::Ident("auto".into()))])
            .to_number()
            .unwrap_err();
        assert!(err.is_semantic());
        assert!(expr(vec![]).to_number().is_err());
        assert!(expr(vec![number(None, "2n+1", Unit::None)]).to_number().is_err());
    }

    #[test_case(vec![number(None, "12", Unit::Pt)], 240 ; "twelve points")]
    #[test_case(vec![number(Some(Sign::Minus), "1.5", Unit::Pt)], -30 ; "negative")]
    #[test_case(vec![number(Some(Sign::Plus), "0.26", Unit::Pt)], 5 ; "rounded")]
    #[test_case(vec![number(None, "12", Unit::Px)], 0 ; "pixels")]
    #[test_case(vec![number(None, "12", Unit::None)], 0 ; "no unit")]
    #[test_case(vec![number(None, "1", Unit::Pt), number(None, "2", Unit::Pt)], 0 ; "two terms")]
    #[test_case(vec![Term::new(Value::Ident("medium".into()))], 0 ; "identifier")]
    fn twips(terms: Vec<Term>, expected: i64) {
        assert_eq!(expr(terms).to_twips(), expected);
    }

    #[test_case(Unit::Pt, "1", 12_700)]
    #[test_case(Unit::Px, "2", 19_050)]
    #[test_case(Unit::In, "1", 914_400)]
    #[test_case(Unit::Cm, "2.5", 900_000)]
    #[test_case(Unit::Mm, "1", 36_000)]
    #[test_case(Unit::Pc, "1", 152_400)]
    #[test_case(Unit::Em, "1", 0)]
    #[test_case(Unit::Percent, "50", 0)]
    fn emus(unit: Unit, value: &str, expected: i64) {
        assert_eq!(expr(vec![number(None, value, unit)]).to_emu(), expected);
    }

    #[test]
    fn negative_emus() {
        let e = expr(vec![number(Some(Sign::Minus), "1", Unit::In)]);
        assert_eq!(e.to_emu(), -914_400);
    }
}
