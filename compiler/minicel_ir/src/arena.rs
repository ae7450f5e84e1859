//! Arena allocation for the flat formula AST.
//!
//! - Contiguous storage for all expressions of a table
//! - Child references use [`ExprId`] indices
//! - Bulk deallocation when the arena is dropped

use std::fmt;

use crate::{CellPos, Expr, ExprId};

/// Initial node capacity; growth doubles from here.
const INITIAL_CAPACITY: usize = 128;

/// Contiguous, append-only storage for every expression parsed from a table.
///
/// Every formula cell in a file allocates into the same arena. Nodes are
/// never removed, so any [`ExprId`] handed out stays valid for the lifetime
/// of the arena.
#[derive(Clone, Debug)]
pub struct ExprArena {
    exprs: Vec<Expr>,
}

impl Default for ExprArena {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        ExprArena {
            exprs: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    #[cfg(feature = "dump")]
    pub(crate) fn from_exprs(exprs: Vec<Expr>) -> Self {
        ExprArena { exprs }
    }

    /// Allocate an expression, return its ID.
    ///
    /// # Panics
    /// Panics if the arena already holds `u32::MAX` nodes.
    #[inline]
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .ok()
            .filter(|&index| index != u32::MAX);
        let Some(index) = index else {
            panic!("expression arena overflow");
        };
        debug_assert!(
            expr.children().all(|child| child.index() < self.exprs.len()),
            "child index out of range for {expr:?}"
        );
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Get an expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds. IDs only come from [`alloc`](Self::alloc)
    /// on this arena, so this indicates a bug.
    #[inline]
    #[track_caller]
    pub fn get(&self, id: ExprId) -> &Expr {
        assert!(
            id.index() < self.exprs.len(),
            "{id:?} out of range (arena holds {} nodes)",
            self.exprs.len()
        );
        &self.exprs[id.index()]
    }

    /// Get an expression by ID, or `None` if it is out of range.
    #[inline]
    pub fn try_get(&self, id: ExprId) -> Option<&Expr> {
        self.exprs.get(id.index())
    }

    /// Number of expressions in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Iterate over `(id, expr)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (ExprId, &Expr)> {
        self.exprs
            .iter()
            .enumerate()
            .map(|(index, expr)| (ExprId::new(index as u32), expr))
    }

    #[cfg(feature = "dump")]
    pub(crate) fn as_slice(&self) -> &[Expr] {
        &self.exprs
    }

    /// Copy the tree rooted at `root` into a fresh arena.
    ///
    /// Node order is preserved, so the copy keeps the children-first layout.
    pub fn extract(&self, root: ExprId) -> (ExprArena, ExprId) {
        let mut reachable = vec![false; root.index() + 1];
        let mut pending = vec![root];
        while let Some(id) = pending.pop() {
            if !std::mem::replace(&mut reachable[id.index()], true) {
                pending.extend(self.get(id).children());
            }
        }

        let mut out = ExprArena::new();
        let mut remap = vec![ExprId::INVALID; reachable.len()];
        for (index, _) in reachable.iter().enumerate().filter(|(_, keep)| **keep) {
            let expr = match self.exprs[index] {
                Expr::Plus { lhs, rhs } => Expr::Plus {
                    lhs: remap[lhs.index()],
                    rhs: remap[rhs.index()],
                },
                leaf => leaf,
            };
            remap[index] = out.alloc(expr);
        }
        (out, remap[root.index()])
    }

    /// Render the expression rooted at `id` in fully parenthesized form.
    pub fn display(&self, id: ExprId) -> ExprDisplay<'_> {
        ExprDisplay { arena: self, id }
    }
}

/// [`fmt::Display`] adapter returned by [`ExprArena::display`].
pub struct ExprDisplay<'a> {
    arena: &'a ExprArena,
    id: ExprId,
}

impl fmt::Display for ExprDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.arena.get(self.id) {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::CellRef { row, col } => write!(f, "{}", CellPos::new(row, col)),
            Expr::Plus { lhs, rhs } => write!(
                f,
                "({} + {})",
                self.arena.display(lhs),
                self.arena.display(rhs)
            ),
        }
    }
}

#[cfg(test)]
mod tests;
