use std::fmt;

use minicel_ir::{CellPos, Span};

use crate::ErrorCode;

/// A fatal error, ready for rendering.
///
/// minicel has no warnings: every diagnostic aborts the run, so there is no
/// severity field.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Cell the error was detected in, if any.
    pub cell: Option<CellPos>,
    /// Byte range within that cell's formula text.
    pub span: Option<Span>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            cell: None,
            span: None,
            notes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_cell(mut self, cell: CellPos) -> Self {
        self.cell = Some(cell);
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}
