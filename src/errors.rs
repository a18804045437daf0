//! Error types with rich diagnostics using miette
//!
//! Formula errors never escape the resolution APIs: the evaluator maps them
//! to `0`. They are public so callers parsing formulas themselves (or
//! reporting on document content) get spans for free.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors that occur while parsing a guide formula
#[derive(Error, Diagnostic, Debug)]
pub enum FormulaError {
    #[error("malformed formula: {message}")]
    #[diagnostic(
        code(prstgeom::formula::syntax),
        help("a formula is an operator followed by operands, e.g. `*/ w adj 100000`")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("unknown formula operator: {keyword}")]
    #[diagnostic(code(prstgeom::formula::unknown_operator))]
    UnknownOperator {
        keyword: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not an operator")]
        span: SourceSpan,
    },
}

impl FormulaError {
    pub(crate) fn syntax(formula: &str, message: impl Into<String>, offset: usize) -> Self {
        let len = formula.len().saturating_sub(offset).min(1);
        FormulaError::Syntax {
            message: message.into(),
            src: named_source(formula),
            span: (offset, len).into(),
        }
    }

    pub(crate) fn unknown_operator(formula: &str, keyword: &str, offset: usize) -> Self {
        FormulaError::UnknownOperator {
            keyword: keyword.to_string(),
            src: named_source(formula),
            span: (offset, keyword.len()).into(),
        }
    }
}

fn named_source(formula: &str) -> NamedSource<String> {
    NamedSource::new("<formula>", formula.to_string())
}
