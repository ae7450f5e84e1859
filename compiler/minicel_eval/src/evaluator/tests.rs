#![allow(clippy::unwrap_used)]

use super::*;
use crate::Value;
use pretty_assertions::assert_eq;

fn pos(name: &str) -> CellPos {
    CellPos::from_name(name).unwrap()
}

fn positions(names: &[&str]) -> Vec<CellPos> {
    names.iter().map(|name| pos(name)).collect()
}

/// Parse and evaluate `source`, returning the grid and stats.
fn run(source: &str) -> Result<(Grid<'_>, EvalStats), EvalError> {
    let mut arena = ExprArena::new();
    let mut table = Table::parse(source, &mut arena).unwrap();
    let mut evaluator = Evaluator::new(&arena);
    let grid = evaluator.evaluate_table(&mut table)?;
    Ok((grid, evaluator.stats()))
}

fn value_at(source: &str, name: &str) -> f64 {
    let (grid, _) = run(source).unwrap();
    grid.number(pos(name)).unwrap()
}

#[test]
fn test_reference_to_number() {
    assert_eq!(value_at("=A1\n5", "A0"), 5.0);
}

#[test]
fn test_sum_of_two_references() {
    assert_eq!(value_at("=A1+B1\n3|4", "A0"), 7.0);
}

#[test]
fn test_literal_sum() {
    assert_eq!(value_at("=1+2+3+4", "A0"), 10.0);
}

#[test]
fn test_sum_is_grouped_right_to_left() {
    // 1 + (1 + 2^53) rounds to 2^53; (1 + 1) + 2^53 would be 2^53 + 2.
    assert_eq!(value_at("=1+1+9007199254740992", "A0"), 9_007_199_254_740_992.0);
}

#[test]
fn test_forward_and_backward_references() {
    let (grid, _) = run("=B0+1|=C0+1|5\n=A0+B0+C0").unwrap();
    assert_eq!(grid.number(pos("A0")), Some(7.0));
    assert_eq!(grid.number(pos("B0")), Some(6.0));
    assert_eq!(grid.number(pos("A1")), Some(18.0));
}

#[test]
fn test_empty_cell_reads_as_zero() {
    assert_eq!(value_at("1\n=B0+2|x", "A1"), 2.0);
}

#[test]
fn test_non_finite_values_propagate() {
    assert_eq!(value_at("=inf+1", "A0"), f64::INFINITY);
    assert!(value_at("=NaN+A1\n1", "A0").is_nan());
}

#[test]
fn test_literal_cells_pass_through() {
    let (grid, stats) = run("a|1.5\n|x").unwrap();
    assert_eq!(grid.get(pos("A0")), Some(Value::Text("a")));
    assert_eq!(grid.get(pos("B0")), Some(Value::Number(1.5)));
    assert_eq!(grid.get(pos("A1")), Some(Value::Text("")));
    assert_eq!(stats, EvalStats::default());
}

#[test]
fn test_two_cycle() {
    let err = run("=B0|=A0").unwrap_err();
    assert_eq!(
        err,
        EvalError::CircularDependency {
            cell: pos("A0"),
            path: positions(&["A0", "B0", "A0"]),
        }
    );
}

#[test]
fn test_three_cycle() {
    let err = run("=B0|=C0|=A0").unwrap_err();
    assert_eq!(
        err,
        EvalError::CircularDependency {
            cell: pos("A0"),
            path: positions(&["A0", "B0", "C0", "A0"]),
        }
    );
}

#[test]
fn test_vertical_three_cycle() {
    let err = run("=A1\n=A2\n=A0").unwrap_err();
    assert_eq!(
        err,
        EvalError::CircularDependency {
            cell: pos("A0"),
            path: positions(&["A0", "A1", "A2", "A0"]),
        }
    );
}

#[test]
fn test_self_reference() {
    let err = run("=A0+1").unwrap_err();
    assert_eq!(
        err,
        EvalError::CircularDependency {
            cell: pos("A0"),
            path: positions(&["A0", "A0"]),
        }
    );
}

#[test]
fn test_cycle_path_starts_at_reentered_cell() {
    let err = run("=B0|=C0|=B0").unwrap_err();
    assert_eq!(
        err,
        EvalError::CircularDependency {
            cell: pos("B0"),
            path: positions(&["B0", "C0", "B0"]),
        }
    );
}

#[test]
fn test_reference_to_text() {
    let err = run("=B0|hello").unwrap_err();
    assert_eq!(
        err,
        EvalError::TypeMismatch {
            cell: pos("B0"),
            from: Some(pos("A0")),
            text: "hello".to_owned(),
        }
    );
    assert_eq!(err.code(), minicel_diagnostic::ErrorCode::E2002);
}

#[test]
fn test_reference_outside_table() {
    let err = run("1|=Z9").unwrap_err();
    assert_eq!(
        err,
        EvalError::OutOfBounds {
            cell: pos("Z9"),
            from: Some(pos("B0")),
            rows: 1,
            cols: 2,
        }
    );
}

#[test]
fn test_shared_dependency_is_walked_once() {
    let (grid, stats) = run("=C0|=C0|=1+2").unwrap();
    assert_eq!(grid.number(pos("A0")), Some(3.0));
    assert_eq!(grid.number(pos("B0")), Some(3.0));
    assert_eq!(
        stats,
        EvalStats {
            formulas_evaluated: 3,
            cache_hits: 2,
            nodes_visited: 1 + 3 + 1,
        }
    );
}

#[test]
fn test_status_is_evaluated_afterwards() {
    let mut arena = ExprArena::new();
    let mut table = Table::parse("=B0|=1", &mut arena).unwrap();
    Evaluator::new(&arena).evaluate_table(&mut table).unwrap();
    for pos in table.positions() {
        let Some(Cell::Formula(formula)) = table.get(pos) else {
            panic!("expected formula at {pos}");
        };
        assert_eq!(formula.status, EvalStatus::Evaluated);
        assert_eq!(formula.value, 1.0);
    }
}

#[test]
fn test_evaluate_cell_directly() {
    let mut arena = ExprArena::new();
    let mut table = Table::parse("=B0+B0|2|txt", &mut arena).unwrap();
    let mut evaluator = Evaluator::new(&arena);

    assert_eq!(evaluator.evaluate_cell(&mut table, pos("A0")), Ok(4.0));
    assert_eq!(evaluator.evaluate_cell(&mut table, pos("A0")), Ok(4.0));
    assert_eq!(evaluator.stats().formulas_evaluated, 1);
    assert_eq!(evaluator.stats().cache_hits, 1);

    assert!(matches!(
        evaluator.evaluate_cell(&mut table, pos("C0")),
        Err(EvalError::TypeMismatch { from: None, .. })
    ));
}

#[test]
fn test_deep_reference_chain() {
    const DEPTH: usize = 10_000;
    let mut source = String::new();
    for row in 0..DEPTH {
        source.push_str(&format!("=A{}+1\n", row + 1));
    }
    source.push_str("0\n");

    let (grid, stats) = run(&source).unwrap();
    assert_eq!(grid.number(pos("A0")), Some(DEPTH as f64));
    assert_eq!(grid.number(CellPos::new(DEPTH - 1, 0)), Some(1.0));
    assert_eq!(stats.formulas_evaluated, DEPTH);
}

#[test]
fn test_long_plus_chain() {
    let source = format!("={}", vec!["1"; 20_000].join("+"));
    assert_eq!(value_at(&source, "A0"), 20_000.0);
}

#[test]
fn test_diagnostic_for_cycle_lists_path() {
    let diagnostic = run("=B0|=A0").unwrap_err().to_diagnostic();
    assert_eq!(diagnostic.cell, Some(pos("A0")));
    assert_eq!(diagnostic.notes, vec!["A0 -> B0 -> A0".to_owned()]);
}
