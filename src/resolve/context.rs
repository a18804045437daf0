//! Guide context - name to value lookup used while evaluating formulas

use std::borrow::Cow;
use std::collections::HashMap;

use crate::ast::Operand;
use crate::types::Guide;

use super::defaults::*;
use super::eval::evaluate;

/// Evaluation-time guide values for one shape.
///
/// Seeded with the built-in constants for the shape's width and height.
/// Lookups of unknown names yield `0`.
#[derive(Debug, Clone)]
pub struct GuideContext {
    values: HashMap<Cow<'static, str>, f64>,
}

impl GuideContext {
    /// Create a context for a `w` x `h` shape with all built-ins defined
    pub fn new(w: f64, h: f64) -> Self {
        let mut ctx = Self {
            values: HashMap::with_capacity(64),
        };
        ctx.init_builtin_guides(w, h);
        ctx
    }

    fn init_builtin_guides(&mut self, w: f64, h: f64) {
        let ss = w.min(h);
        let ls = w.max(h);

        macro_rules! builtin_guides {
            ($($name:literal => $value:expr),* $(,)?) => {
                $(
                    self.values.insert(Cow::Borrowed($name), $value);
                )*
            };
        }

        builtin_guides! {
            "w"    => w,
            "h"    => h,
            // Edges and centre
            "l"    => 0.0,
            "t"    => 0.0,
            "r"    => w,
            "b"    => h,
            "hc"   => w / 2.0,
            "vc"   => h / 2.0,
            // Short and long side
            "ss"   => ss,
            "ls"   => ls,
            // Angles, OOXML units
            "cd2"  => CD2,
            "cd4"  => CD4,
            "cd8"  => CD8,
            "3cd4" => THREE_CD4,
            "3cd8" => THREE_CD8,
            "5cd8" => FIVE_CD8,
            "7cd8" => SEVEN_CD8,
        }

        for (name, divisor) in WIDTH_DIVISORS {
            self.values.insert(Cow::Borrowed(name), w / divisor);
        }
        for (name, divisor) in HEIGHT_DIVISORS {
            self.values.insert(Cow::Borrowed(name), h / divisor);
        }
        for (name, divisor) in SHORT_SIDE_DIVISORS {
            self.values.insert(Cow::Borrowed(name), ss / divisor);
        }
    }

    /// Apply explicit overrides; they replace same-named built-ins
    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a f64)>,
    {
        for (name, value) in overrides {
            self.values.insert(Cow::Owned(name.clone()), *value);
        }
        self
    }

    /// Value of a guide, `0` if unknown
    pub fn get(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Define or replace a guide value
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(Cow::Owned(name.into()), value);
    }

    /// Resolve an operand: literals as-is, names through `get`
    pub fn value_of(&self, operand: &Operand) -> f64 {
        match operand {
            Operand::Literal(v) => *v,
            Operand::Guide(name) => self.get(name),
        }
    }

    /// Resolve a raw reference token such as `"x1"`, `"3cd4"` or `"-21600"`
    pub fn resolve_ref(&self, token: &str) -> f64 {
        self.value_of(&Operand::from_token(token.trim()))
    }

    /// Evaluate one guide and store it so later guides can reference it
    pub fn evaluate_guide(&mut self, name: &str, formula: &str) -> f64 {
        let value = evaluate(formula, self);
        crate::log::trace!(guide = name, formula, value, "guide evaluated");
        self.set(name, value);
        value
    }

    /// Evaluate a guide list strictly in declaration order
    pub fn evaluate_guides(&mut self, guides: &[Guide]) {
        for guide in guides {
            self.evaluate_guide(&guide.name, &guide.formula);
        }
    }
}
