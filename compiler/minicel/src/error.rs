//! Top-level error type for the CLI and library facade.

use std::io;
use std::path::PathBuf;

use minicel_diagnostic::{Diagnostic, ErrorCode};
use minicel_eval::{EvalError, TableError};
use minicel_ir::{CellPos, DumpError};
use minicel_parse::ParseError;

/// Any failure of a minicel command.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not write file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error(transparent)]
    Dump(#[from] DumpError),

    #[error("`{name}` is not a cell name")]
    InvalidCellName { name: String },

    #[error("cell {cell} does not hold a formula")]
    NotAFormula { cell: CellPos },
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Read { .. } | Error::Write { .. } => ErrorCode::E9001,
            Error::Table(err) => err.code(),
            Error::Parse(err) => err.code(),
            Error::Eval(err) => err.code(),
            Error::Dump(_) => ErrorCode::E9002,
            Error::InvalidCellName { .. } => ErrorCode::E1001,
            Error::NotAFormula { .. } => ErrorCode::E9003,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Table(err) => err.to_diagnostic(),
            Error::Parse(err) => err.to_diagnostic(),
            Error::Eval(err) => err.to_diagnostic(),
            Error::NotAFormula { cell } => {
                Diagnostic::error(self.code(), self.to_string()).with_cell(*cell)
            }
            Error::Read { .. }
            | Error::Write { .. }
            | Error::Dump(_)
            | Error::InvalidCellName { .. } => Diagnostic::error(self.code(), self.to_string()),
        }
    }
}
