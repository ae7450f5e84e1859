//! Table construction and evaluation errors.

use minicel_diagnostic::{Diagnostic, ErrorCode};
use minicel_ir::CellPos;
use minicel_parse::ParseError;

/// A formula cell failed to parse.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid formula in {cell}: {source}")]
pub struct TableError {
    pub cell: CellPos,
    pub source: ParseError,
}

impl TableError {
    pub fn code(&self) -> ErrorCode {
        self.source.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diagnostic = self.source.to_diagnostic().with_cell(self.cell);
        diagnostic.message = format!("invalid formula in {}: {}", self.cell, self.source);
        diagnostic
    }
}

/// A fatal evaluation error.
///
/// `from` names the formula cell whose reference led to the failing cell,
/// when there is one.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EvalError {
    /// A formula cell was re-entered while still being evaluated.
    /// `path` runs from the first cell of the cycle back to `cell`.
    #[error("circular dependency detected at {cell}")]
    CircularDependency { cell: CellPos, path: Vec<CellPos> },

    #[error("text cell {cell} (`{text}`) used in a numeric context")]
    TypeMismatch {
        cell: CellPos,
        from: Option<CellPos>,
        text: String,
    },

    #[error("reference to {cell} is outside the {rows}x{cols} table")]
    OutOfBounds {
        cell: CellPos,
        from: Option<CellPos>,
        rows: usize,
        cols: usize,
    },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::CircularDependency { .. } => ErrorCode::E2001,
            EvalError::TypeMismatch { .. } => ErrorCode::E2002,
            EvalError::OutOfBounds { .. } => ErrorCode::E2003,
        }
    }

    /// The cell the error is reported at.
    pub fn cell(&self) -> CellPos {
        match self {
            EvalError::CircularDependency { cell, .. }
            | EvalError::TypeMismatch { cell, .. }
            | EvalError::OutOfBounds { cell, .. } => *cell,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error(self.code(), self.to_string()).with_cell(self.cell());
        match self {
            EvalError::CircularDependency { path, .. } => {
                let chain = path
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ");
                diagnostic.with_note(chain)
            }
            EvalError::TypeMismatch { from, .. } | EvalError::OutOfBounds { from, .. } => {
                match from {
                    Some(from) => diagnostic.with_note(format!("referenced from {from}")),
                    None => diagnostic,
                }
            }
        }
    }
}
