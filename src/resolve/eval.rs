//! Formula evaluation
//!
//! Evaluation never fails: parse errors, unknown operators, missing operands
//! and unknown guides all collapse to `0`, as do the guarded numeric cases
//! (division by zero, square root of a negative).

use crate::ast::{Formula, Operator};
use crate::parse::parse_formula;

use super::context::GuideContext;
use super::defaults::ANGLE_UNITS_PER_DEGREE;

/// Convert an OOXML angle (60000ths of a degree) to radians.
///
/// Used by `sin`, `cos` and `tan`. `cat2`/`sat2` do not go through here:
/// their angle comes straight out of `atan2` and is already in radians.
#[inline]
pub fn ooxml_angle_to_radians(angle: f64) -> f64 {
    (angle / ANGLE_UNITS_PER_DEGREE).to_radians()
}

/// Convert radians to OOXML angle units. Used by `at2`.
#[inline]
pub fn radians_to_ooxml_angle(rad: f64) -> f64 {
    rad.to_degrees() * ANGLE_UNITS_PER_DEGREE
}

/// Convert an OOXML angle to plain degrees
#[inline]
pub fn ooxml_angle_to_degrees(angle: f64) -> f64 {
    angle / ANGLE_UNITS_PER_DEGREE
}

/// Parse and evaluate a formula against a context
pub fn evaluate(formula: &str, ctx: &GuideContext) -> f64 {
    match parse_formula(formula) {
        Ok(parsed) => parsed.eval(ctx),
        Err(_err) => {
            crate::log::warn!(formula, error = %_err, "unparseable formula evaluates to 0");
            0.0
        }
    }
}

impl Formula {
    /// Evaluate against a context
    pub fn eval(&self, ctx: &GuideContext) -> f64 {
        let arg = |i: usize| {
            self.operands
                .get(i)
                .map(|operand| ctx.value_of(operand))
                .unwrap_or(0.0)
        };

        let result = match self.operator {
            Operator::Val => arg(0),
            Operator::MulDiv => {
                let (x, y, z) = (arg(0), arg(1), arg(2));
                if z == 0.0 { 0.0 } else { x * y / z }
            }
            Operator::AddSub => arg(0) + arg(1) - arg(2),
            Operator::AddDiv => {
                let (x, y, z) = (arg(0), arg(1), arg(2));
                if z == 0.0 { 0.0 } else { (x + y) / z }
            }
            Operator::IfElse => {
                if arg(0) > 0.0 { arg(1) } else { arg(2) }
            }
            Operator::Abs => arg(0).abs(),
            Operator::Sqrt => {
                let x = arg(0);
                if x < 0.0 { 0.0 } else { x.sqrt() }
            }
            Operator::Min => arg(0).min(arg(1)),
            Operator::Max => arg(0).max(arg(1)),
            Operator::Mod => {
                let (x, y, z) = (arg(0), arg(1), arg(2));
                (x * x + y * y + z * z).sqrt()
            }
            Operator::Pin => {
                let (lo, v, hi) = (arg(0), arg(1), arg(2));
                if v < lo {
                    lo
                } else if v > hi {
                    hi
                } else {
                    v
                }
            }
            Operator::Sin => arg(0) * ooxml_angle_to_radians(arg(1)).sin(),
            Operator::Cos => arg(0) * ooxml_angle_to_radians(arg(1)).cos(),
            Operator::Tan => arg(0) * ooxml_angle_to_radians(arg(1)).tan(),
            Operator::ArcTan2 => radians_to_ooxml_angle(arg(1).atan2(arg(0))),
            // atan2 result is used directly as radians
            Operator::CosArcTan2 => arg(0) * arg(2).atan2(arg(1)).cos(),
            Operator::SinArcTan2 => arg(0) * arg(2).atan2(arg(1)).sin(),
        };

        if result.is_nan() { 0.0 } else { result }
    }
}
