use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_alloc_returns_sequential_ids() {
    let mut arena = ExprArena::new();
    let a = arena.alloc(Expr::Number(1.0));
    let b = arena.alloc(Expr::CellRef { row: 0, col: 1 });
    assert_eq!(a, ExprId::new(0));
    assert_eq!(b, ExprId::new(1));
    assert_eq!(arena.len(), 2);
}

#[test]
fn test_get_returns_stored_node() {
    let mut arena = ExprArena::new();
    let lhs = arena.alloc(Expr::Number(1.5));
    let rhs = arena.alloc(Expr::CellRef { row: 2, col: 0 });
    let plus = arena.alloc(Expr::Plus { lhs, rhs });
    assert_eq!(*arena.get(plus), Expr::Plus { lhs, rhs });
    assert_eq!(*arena.get(lhs), Expr::Number(1.5));
}

#[test]
fn test_grows_past_initial_capacity() {
    let mut arena = ExprArena::new();
    for i in 0..1000 {
        arena.alloc(Expr::Number(f64::from(i)));
    }
    assert_eq!(arena.len(), 1000);
    assert_eq!(*arena.get(ExprId::new(999)), Expr::Number(999.0));
}

#[test]
fn test_try_get_out_of_range() {
    let arena = ExprArena::new();
    assert!(arena.is_empty());
    assert_eq!(arena.try_get(ExprId::new(0)), None);
    assert_eq!(arena.try_get(ExprId::INVALID), None);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_get_out_of_range_panics() {
    let mut arena = ExprArena::new();
    arena.alloc(Expr::Number(1.0));
    arena.get(ExprId::new(1));
}

#[test]
fn test_display_is_right_nested() {
    let mut arena = ExprArena::new();
    let a = arena.alloc(Expr::CellRef { row: 0, col: 0 });
    let b = arena.alloc(Expr::CellRef { row: 1, col: 1 });
    let c = arena.alloc(Expr::Number(2.5));
    let bc = arena.alloc(Expr::Plus { lhs: b, rhs: c });
    let root = arena.alloc(Expr::Plus { lhs: a, rhs: bc });
    assert_eq!(arena.display(root).to_string(), "(A0 + (B1 + 2.5))");
}

#[test]
fn test_extract_copies_only_the_subtree() {
    let mut arena = ExprArena::new();
    let other = arena.alloc(Expr::Number(9.0));
    let a = arena.alloc(Expr::CellRef { row: 0, col: 0 });
    let b = arena.alloc(Expr::Number(1.0));
    let root = arena.alloc(Expr::Plus { lhs: a, rhs: b });
    arena.alloc(Expr::Plus { lhs: other, rhs: root });

    let (copy, copy_root) = arena.extract(root);
    assert_eq!(copy.len(), 3);
    assert_eq!(copy_root, ExprId::new(2));
    assert_eq!(copy.display(copy_root).to_string(), "(A0 + 1)");
}

#[test]
fn test_extract_leaf() {
    let mut arena = ExprArena::new();
    arena.alloc(Expr::Number(1.0));
    let leaf = arena.alloc(Expr::CellRef { row: 4, col: 2 });

    let (copy, copy_root) = arena.extract(leaf);
    assert_eq!(copy.len(), 1);
    assert_eq!(*copy.get(copy_root), Expr::CellRef { row: 4, col: 2 });
}
