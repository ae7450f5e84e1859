//! Parse errors.

use minicel_diagnostic::{Diagnostic, ErrorCode};
use minicel_ir::Span;
use minicel_lexer::LexError;

/// A fatal formula syntax error.
///
/// Spans are byte offsets into the formula text (after the leading `=`).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Not a number and not a single uppercase letter followed by digits.
    #[error("invalid cell reference `{text}`")]
    InvalidCellRef { text: String, span: Span },

    #[error("unexpected end of formula, expected a number or cell reference")]
    UnexpectedEnd { span: Span },
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lex(_) => ErrorCode::E0001,
            ParseError::InvalidCellRef { .. } => ErrorCode::E1001,
            ParseError::UnexpectedEnd { .. } => ErrorCode::E1002,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(err) => err.span,
            ParseError::InvalidCellRef { span, .. } | ParseError::UnexpectedEnd { span } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code(), self.to_string()).with_span(self.span());
        match self {
            ParseError::InvalidCellRef { .. } => diagnostic
                .with_note("cell references are one letter `A`..`Z` followed by a row index, e.g. `B3`"),
            ParseError::Lex(_) => diagnostic.with_note("formulas may only contain numbers, cell references and `+`"),
            ParseError::UnexpectedEnd { .. } => diagnostic,
        }
    }
}
