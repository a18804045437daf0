//! Parse pest pairs into formula AST nodes

use crate::ast::*;
use crate::errors::FormulaError;
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;
use std::str::FromStr;

#[derive(Parser)]
#[grammar = "formula.pest"]
pub struct FormulaParser;

/// Parse a guide formula such as `*/ ss a 100000`
pub fn parse_formula(source: &str) -> Result<Formula, FormulaError> {
    let mut pairs = FormulaParser::parse(Rule::formula, source).map_err(|e| {
        let offset = match e.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };
        FormulaError::syntax(source, e.variant.message(), offset)
    })?;

    let Some(formula) = pairs.next() else {
        return Err(FormulaError::syntax(source, "empty formula", 0));
    };

    let mut inner = formula.into_inner();
    let Some(op_pair) = inner.next() else {
        return Err(FormulaError::syntax(source, "missing operator", 0));
    };
    let operator = parse_operator(source, &op_pair)?;

    let operands = inner
        .filter(|p| p.as_rule() != Rule::EOI)
        .map(parse_operand)
        .collect();

    Ok(Formula { operator, operands })
}

fn parse_operator(source: &str, pair: &Pair<Rule>) -> Result<Operator, FormulaError> {
    let keyword = pair.as_str();
    Operator::from_keyword(keyword)
        .ok_or_else(|| FormulaError::unknown_operator(source, keyword, pair.as_span().start()))
}

fn parse_operand(pair: Pair<Rule>) -> Operand {
    match pair.as_rule() {
        Rule::number => Operand::from_token(pair.as_str()),
        _ => Operand::Guide(pair.as_str().to_string()),
    }
}

impl Formula {
    pub fn parse(source: &str) -> Result<Self, FormulaError> {
        parse_formula(source)
    }
}

impl FromStr for Formula {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_muldiv() {
        let f = parse_formula("*/ ss adj 100000").unwrap();
        assert_eq!(f.operator, Operator::MulDiv);
        assert_eq!(
            f.operands,
            vec![
                Operand::Guide("ss".into()),
                Operand::Guide("adj".into()),
                Operand::Literal(100000.0),
            ]
        );
    }

    #[test]
    fn parse_negative_literal() {
        let f = parse_formula("*/ maxAdj -1 2").unwrap();
        assert_eq!(f.operands[1], Operand::Literal(-1.0));
    }

    #[test]
    fn parse_digit_prefixed_guide() {
        let f = parse_formula("+- 3cd4 0 cd8").unwrap();
        assert_eq!(f.operands[0], Operand::Guide("3cd4".into()));
        assert_eq!(f.operands[2], Operand::Guide("cd8".into()));
    }

    #[test]
    fn parse_tolerates_extra_whitespace() {
        let f = parse_formula("  val   7  ").unwrap();
        assert_eq!(f.operator, Operator::Val);
        assert_eq!(f.operands, vec![Operand::Literal(7.0)]);
    }

    #[test]
    fn parse_operator_only() {
        let f = parse_formula("abs").unwrap();
        assert_eq!(f.operator, Operator::Abs);
        assert!(f.operands.is_empty());
    }

    #[test]
    fn empty_formula_is_syntax_error() {
        let err = parse_formula("   ").unwrap_err();
        assert!(matches!(err, FormulaError::Syntax { .. }));
    }

    #[test]
    fn unknown_operator_is_reported() {
        let err = parse_formula("frob 1 2").unwrap_err();
        match err {
            FormulaError::UnknownOperator { keyword, .. } => assert_eq!(keyword, "frob"),
            other => panic!("expected unknown operator, got {:?}", other),
        }
    }

    #[test]
    fn unknown_operator_span_covers_keyword() {
        let err = Formula::parse("  frob 1").unwrap_err();
        match err {
            FormulaError::UnknownOperator { span, .. } => {
                assert_eq!((span.offset(), span.len()), (2, 4));
            }
            other => panic!("expected unknown operator, got {:?}", other),
        }
    }

    #[test]
    fn from_str_and_display() {
        let f: Formula = "pin 0 adj 50000".parse().unwrap();
        assert_eq!(f.to_string(), "pin 0 adj 50000");
    }
}
