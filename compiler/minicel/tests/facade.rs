//! End-to-end tests through the public `minicel` API.

#![allow(clippy::unwrap_used)]

use std::fs;

use minicel::commands::{dump_ast, run_file, show_ast, RunOptions};
use minicel::{evaluate_source, render_grid, Error, RenderOptions};
use minicel_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

fn render(source: &str) -> String {
    let grid = evaluate_source(source).unwrap();
    render_grid(&grid, RenderOptions::default())
}

#[test]
fn evaluates_mixed_table() {
    let source = "name|a|b|sum\nx|3|4|=B1+C1\ny|1.5|2|=B2+C2+D1\n";
    assert_eq!(
        render(source),
        "name|a|b|sum\nx|3.000000|4.000000|7.000000\ny|1.500000|2.000000|10.500000\n"
    );
}

#[test]
fn short_rows_are_padded_with_empty_cells() {
    assert_eq!(render("1|2|3\n=C0\n"), "1.000000|2.000000|3.000000\n3.000000||\n");
}

#[test]
fn reference_to_padding_reads_zero() {
    assert_eq!(render("1|2\n=B1+5\n"), "1.000000|2.000000\n5.000000|\n");
}

#[test]
fn formula_ends_at_first_non_plus_token() {
    assert_eq!(render("=1 2|5\n=B0+1 A0\n"), "1.000000|5.000000\n6.000000|\n");
}

#[test]
fn non_utf8_text_cells_do_not_fail_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9|1|=B0+1\n").unwrap();

    assert_eq!(
        run_file(&path, &RunOptions::default()).unwrap(),
        "caf\u{fffd}|1.000000|2.000000\n"
    );
}

#[test]
fn errors_carry_codes() {
    let cases = [
        ("=A0+$", ErrorCode::E0001),
        ("=AA1", ErrorCode::E1001),
        ("=1+", ErrorCode::E1002),
        ("=B0|=A0", ErrorCode::E2001),
        ("x|=A0", ErrorCode::E2002),
        ("=C9", ErrorCode::E2003),
    ];
    for (source, code) in cases {
        let err = evaluate_source(source).unwrap_err();
        assert_eq!(err.code(), code, "{source}");
    }
}

#[test]
fn cycle_diagnostic_names_the_path() {
    let err = evaluate_source("=B0|=C0|=A0").unwrap_err();
    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.code, ErrorCode::E2001);
    assert!(diagnostic.notes.iter().any(|note| note.contains("A0 -> B0 -> C0 -> A0")));
}

#[test]
fn run_file_reads_and_renders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.txt");
    fs::write(&path, "2|=A0+A0\n").unwrap();

    let mut options = RunOptions::default();
    options.render.precision = 1;
    assert_eq!(run_file(&path, &options).unwrap(), "2.0|4.0\n");
}

#[test]
fn run_file_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = run_file(&dir.path().join("absent.txt"), &RunOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Read { .. }));
    assert_eq!(err.code(), ErrorCode::E9001);
}

#[test]
fn dump_and_show_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("table.txt");
    let output = dir.path().join("b0.ast");
    fs::write(&input, "=1+2|=A0+3+4\n").unwrap();

    let summary = dump_ast(&input, "B0", Some(&output)).unwrap();
    assert_eq!(summary.nodes, 5);
    assert_eq!(summary.output, output);

    let shown = show_ast(&output).unwrap();
    assert!(shown.ends_with("(A0 + (3 + 4))\n"), "{shown}");
}

#[test]
fn dump_ast_rejects_non_formula_cells() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("table.txt");
    fs::write(&input, "1|=A0\n").unwrap();
    let output = dir.path().join("out.ast");

    let err = dump_ast(&input, "A0", Some(&output)).unwrap_err();
    assert!(matches!(err, Error::NotAFormula { .. }));
    assert_eq!(err.code(), ErrorCode::E9003);

    let err = dump_ast(&input, "a0", Some(&output)).unwrap_err();
    assert!(matches!(err, Error::InvalidCellName { .. }));
    assert!(!output.exists());
}

#[test]
fn show_ast_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("junk.ast");
    fs::write(&path, [1u8, 2, 3]).unwrap();

    let err = show_ast(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E9002);
}
