//! Syntax tree types for guide formulas
//!
//! A formula is a single operator keyword followed by up to three operands,
//! e.g. `*/ ss adj 100000` or `pin 0 adj 50000`.

use std::fmt;

/// A parsed guide formula
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    pub operator: Operator,
    pub operands: Vec<Operand>,
}

/// A formula operand: either a numeric literal or a guide reference
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Signed numeric literal: `100000`, `-1`, `0.5`
    Literal(f64),
    /// Guide or built-in name: `adj`, `ss`, `3cd4`
    Guide(String),
}

impl Operand {
    /// Classify a raw token. Only whole-token numbers are literals.
    pub fn from_token(token: &str) -> Self {
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Operand::Literal(v),
            _ => Operand::Guide(token.to_string()),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(v) => write!(f, "{}", v),
            Operand::Guide(name) => write!(f, "{}", name),
        }
    }
}

/// Formula operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `val x`
    Val,
    /// `*/ x y z` - multiply then divide
    MulDiv,
    /// `+- x y z` - add then subtract
    AddSub,
    /// `+/ x y z` - add then divide
    AddDiv,
    /// `?: x y z` - if x > 0 then y else z
    IfElse,
    /// `abs x`
    Abs,
    /// `sqrt x`
    Sqrt,
    /// `min x y`
    Min,
    /// `max x y`
    Max,
    /// `mod x y z` - vector length
    Mod,
    /// `pin x y z` - clamp y into [x, z]
    Pin,
    /// `sin x a`
    Sin,
    /// `cos x a`
    Cos,
    /// `tan x a`
    Tan,
    /// `at2 x y` - atan2 in OOXML angle units
    ArcTan2,
    /// `cat2 x y z` - x * cos(atan2(z, y))
    CosArcTan2,
    /// `sat2 x y z` - x * sin(atan2(z, y))
    SinArcTan2,
}

impl Operator {
    /// Every operator, in keyword-table order
    pub const ALL: [Operator; 17] = [
        Operator::Val,
        Operator::MulDiv,
        Operator::AddSub,
        Operator::AddDiv,
        Operator::IfElse,
        Operator::Abs,
        Operator::Sqrt,
        Operator::Min,
        Operator::Max,
        Operator::Mod,
        Operator::Pin,
        Operator::Sin,
        Operator::Cos,
        Operator::Tan,
        Operator::ArcTan2,
        Operator::CosArcTan2,
        Operator::SinArcTan2,
    ];

    /// Look up an operator by its keyword
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "val" => Operator::Val,
            "*/" => Operator::MulDiv,
            "+-" => Operator::AddSub,
            "+/" => Operator::AddDiv,
            "?:" => Operator::IfElse,
            "abs" => Operator::Abs,
            "sqrt" => Operator::Sqrt,
            "min" => Operator::Min,
            "max" => Operator::Max,
            "mod" => Operator::Mod,
            "pin" => Operator::Pin,
            "sin" => Operator::Sin,
            "cos" => Operator::Cos,
            "tan" => Operator::Tan,
            "at2" => Operator::ArcTan2,
            "cat2" => Operator::CosArcTan2,
            "sat2" => Operator::SinArcTan2,
            _ => return None,
        })
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Operator::Val => "val",
            Operator::MulDiv => "*/",
            Operator::AddSub => "+-",
            Operator::AddDiv => "+/",
            Operator::IfElse => "?:",
            Operator::Abs => "abs",
            Operator::Sqrt => "sqrt",
            Operator::Min => "min",
            Operator::Max => "max",
            Operator::Mod => "mod",
            Operator::Pin => "pin",
            Operator::Sin => "sin",
            Operator::Cos => "cos",
            Operator::Tan => "tan",
            Operator::ArcTan2 => "at2",
            Operator::CosArcTan2 => "cat2",
            Operator::SinArcTan2 => "sat2",
        }
    }

    /// Number of operands the operator reads
    pub fn arity(self) -> usize {
        match self {
            Operator::Val | Operator::Abs | Operator::Sqrt => 1,
            Operator::Min
            | Operator::Max
            | Operator::Sin
            | Operator::Cos
            | Operator::Tan
            | Operator::ArcTan2 => 2,
            Operator::MulDiv
            | Operator::AddSub
            | Operator::AddDiv
            | Operator::IfElse
            | Operator::Mod
            | Operator::Pin
            | Operator::CosArcTan2
            | Operator::SinArcTan2 => 3,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.operator)?;
        for operand in &self.operands {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}
