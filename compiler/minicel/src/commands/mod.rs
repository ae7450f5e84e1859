//! Command handlers for the minicel CLI.
//!
//! Handlers return their stdout text or an [`Error`]; `main` prints the
//! output or renders the error and exits non-zero.

mod debug;
mod run;

pub use debug::{dump_ast, lex_formula, parse_formula_text, show_ast, DumpSummary};
pub use run::{parse_run_options, run_file, RunOptions};

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::Error;

/// Read a file into a string.
///
/// The content is treated as bytes: invalid UTF-8 does not fail the read and
/// is replaced with U+FFFD. Formulas only ever contain ASCII, so only text
/// cells can be affected.
pub(crate) fn read_file(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8(bytes).unwrap_or_else(|err| {
        warn!(
            path = %path.display(),
            offset = err.utf8_error().valid_up_to(),
            "input is not valid UTF-8; replacing invalid bytes"
        );
        String::from_utf8_lossy(err.as_bytes()).into_owned()
    }))
}
