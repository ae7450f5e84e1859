//! Formula AST nodes.

use crate::ExprId;

/// A formula expression node.
///
/// Operands are [`ExprId`] handles into the owning arena, never owned
/// subtrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "dump", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Reference to another cell by 0-based row and column.
    CellRef { row: usize, col: usize },
    /// `lhs + rhs`.
    Plus { lhs: ExprId, rhs: ExprId },
}

impl Expr {
    /// Child expressions, left to right.
    pub fn children(&self) -> impl Iterator<Item = ExprId> {
        let pair = match *self {
            Expr::Plus { lhs, rhs } => Some([lhs, rhs]),
            Expr::Number(_) | Expr::CellRef { .. } => None,
        };
        pair.into_iter().flatten()
    }
}
