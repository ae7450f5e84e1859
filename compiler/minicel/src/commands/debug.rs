//! Debug commands: `lex`, `parse`, `dump-ast` and `show-ast`.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use minicel_eval::{Cell, Table};
use minicel_ir::{CellPos, ExprArena};
use minicel_lexer::tokenize;
use minicel_parse::parse_formula;
use tracing::debug;

use super::read_file;
use crate::Error;

/// Accept formulas with or without their leading `=`.
fn strip_marker(formula: &str) -> &str {
    let trimmed = formula.trim_start();
    trimmed.strip_prefix('=').unwrap_or(trimmed)
}

/// Tokenize a formula and list its tokens.
pub fn lex_formula(formula: &str) -> Result<String, Error> {
    let formula = strip_marker(formula);
    let tokens = tokenize(formula).map_err(minicel_parse::ParseError::from)?;

    let mut out = String::new();
    let _ = writeln!(out, "Tokens ({}):", tokens.len());
    for token in &tokens {
        let _ = writeln!(out, "  {:?} `{}` @ {:?}", token.kind, token.text, token.span);
    }
    Ok(out)
}

/// Parse a formula and print its tree.
pub fn parse_formula_text(formula: &str) -> Result<String, Error> {
    let mut arena = ExprArena::new();
    let root = parse_formula(strip_marker(formula), &mut arena)?;

    let mut out = String::new();
    let _ = writeln!(out, "Nodes: {}", arena.len());
    for (id, expr) in arena.iter() {
        let _ = writeln!(out, "  {id:?}: {expr:?}");
    }
    let _ = writeln!(out, "Root: {root:?}");
    let _ = writeln!(out, "{}", arena.display(root));
    Ok(out)
}

/// What [`dump_ast`] wrote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DumpSummary {
    pub cell: CellPos,
    pub output: PathBuf,
    pub nodes: usize,
}

/// Write the AST of one formula cell as a binary dump.
///
/// The whole table is parsed first, so any formula error in the file is
/// reported. Only the named cell's tree is written. The default output path
/// is `<CELL>.ast` in the current directory.
pub fn dump_ast(path: &Path, cell_name: &str, output: Option<&Path>) -> Result<DumpSummary, Error> {
    let cell = CellPos::from_name(cell_name).ok_or_else(|| Error::InvalidCellName {
        name: cell_name.to_owned(),
    })?;

    let source = read_file(path)?;
    let mut arena = ExprArena::new();
    let table = Table::parse(&source, &mut arena)?;
    let Some(Cell::Formula(formula)) = table.get(cell) else {
        return Err(Error::NotAFormula { cell });
    };

    let (tree, root) = arena.extract(formula.expr);
    let mut bytes = Vec::new();
    tree.dump(root, &mut bytes)?;

    let output = output.map_or_else(|| PathBuf::from(format!("{cell}.ast")), Path::to_path_buf);
    fs::write(&output, &bytes).map_err(|source| Error::Write {
        path: output.clone(),
        source,
    })?;
    debug!(%cell, output = %output.display(), nodes = tree.len(), bytes = bytes.len(), "AST dumped");

    Ok(DumpSummary {
        cell,
        output,
        nodes: tree.len(),
    })
}

/// Load a binary dump and print its tree.
pub fn show_ast(path: &Path) -> Result<String, Error> {
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let (arena, root) = ExprArena::load(bytes.as_slice())?;

    let mut out = String::new();
    let _ = writeln!(out, "Nodes: {}", arena.len());
    let _ = writeln!(out, "Root: {root:?}");
    let _ = writeln!(out, "{}", arena.display(root));
    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lex_formula() {
        assert_eq!(
            lex_formula("=A1 + 2").unwrap(),
            "Tokens (3):\n  Word `A1` @ 0..2\n  Plus `+` @ 3..4\n  Word `2` @ 5..6\n"
        );
    }

    #[test]
    fn test_lex_formula_error() {
        let err = lex_formula("A1 - 2").unwrap_err();
        assert_eq!(err.code(), minicel_diagnostic::ErrorCode::E0001);
    }

    #[test]
    fn test_parse_formula_text() {
        assert_eq!(
            parse_formula_text("B0+1").unwrap(),
            "Nodes: 3\n  ExprId(0): CellRef { row: 0, col: 1 }\n  ExprId(1): Number(1.0)\n  \
             ExprId(2): Plus { lhs: ExprId(0), rhs: ExprId(1) }\nRoot: ExprId(2)\n(B0 + 1)\n"
        );
    }

    #[test]
    fn test_strip_marker() {
        assert_eq!(strip_marker("  =A0"), "A0");
        assert_eq!(strip_marker("A0"), "A0");
    }
}
