//! Formula evaluation over a [`Table`].

use minicel_ir::{CellPos, Expr, ExprArena, ExprId};
use minicel_stack::ensure_sufficient_stack;
use tracing::{debug, debug_span, trace};

use crate::{Cell, EvalError, EvalStatus, FormulaCell, Grid, Table};

/// Counters describing one evaluation pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Formula ASTs walked. Each formula cell is walked at most once.
    pub formulas_evaluated: usize,
    /// Reads of an already evaluated formula cell.
    pub cache_hits: usize,
    /// Expression nodes visited across all walks.
    pub nodes_visited: usize,
}

/// Tree-walking evaluator for the formulas in a [`Table`].
///
/// References are resolved on demand: evaluating `=B0` evaluates `B0` first
/// if it is a formula. The table's per-cell [`EvalStatus`] caches results
/// and detects cycles.
pub struct Evaluator<'a> {
    arena: &'a ExprArena,
    stats: EvalStats,
    /// Formula cells currently `InProgress`, outermost first.
    path: Vec<CellPos>,
}

impl<'a> Evaluator<'a> {
    pub fn new(arena: &'a ExprArena) -> Self {
        Evaluator {
            arena,
            stats: EvalStats::default(),
            path: Vec::new(),
        }
    }

    pub fn stats(&self) -> EvalStats {
        self.stats
    }

    /// Evaluate every formula cell row-major, left to right, and return the
    /// resulting grid.
    pub fn evaluate_table<'src>(&mut self, table: &mut Table<'src>) -> Result<Grid<'src>, EvalError> {
        let _span = debug_span!("evaluate_table", rows = table.rows(), cols = table.cols()).entered();

        let positions: Vec<CellPos> = table.positions().collect();
        for pos in positions {
            if let Some(Cell::Formula(_)) = table.get(pos) {
                self.evaluate_cell(table, pos)?;
            }
        }

        debug!(stats = ?self.stats, "evaluation finished");
        Ok(table.to_grid())
    }

    /// Numeric value of the cell at `pos`, evaluating it if it is a formula.
    ///
    /// Empty cells read as `0.0`; text cells are a type mismatch.
    pub fn evaluate_cell(&mut self, table: &mut Table<'_>, pos: CellPos) -> Result<f64, EvalError> {
        self.resolve(table, None, pos)
    }

    fn resolve(
        &mut self,
        table: &mut Table<'_>,
        from: Option<CellPos>,
        pos: CellPos,
    ) -> Result<f64, EvalError> {
        let Some(&cell) = table.get(pos) else {
            return Err(EvalError::OutOfBounds {
                cell: pos,
                from,
                rows: table.rows(),
                cols: table.cols(),
            });
        };

        match cell {
            Cell::Number(value) => Ok(value),
            Cell::Empty => Ok(0.0),
            Cell::Text(span) => Err(EvalError::TypeMismatch {
                cell: pos,
                from,
                text: table.text(span).to_owned(),
            }),
            Cell::Formula(formula) => self.evaluate_formula(table, pos, formula),
        }
    }

    fn evaluate_formula(
        &mut self,
        table: &mut Table<'_>,
        pos: CellPos,
        formula: FormulaCell,
    ) -> Result<f64, EvalError> {
        match formula.status {
            EvalStatus::Evaluated => {
                self.stats.cache_hits += 1;
                Ok(formula.value)
            }
            EvalStatus::InProgress => {
                let start = self.path.iter().position(|&p| p == pos).unwrap_or(0);
                let mut path = self.path[start..].to_vec();
                path.push(pos);
                Err(EvalError::CircularDependency { cell: pos, path })
            }
            EvalStatus::Unevaluated => {
                trace!(%pos, "evaluating formula");
                table.set_formula_state(pos, EvalStatus::InProgress, 0.0);
                self.path.push(pos);
                self.stats.formulas_evaluated += 1;

                let value = self.evaluate_expr(table, pos, formula.expr)?;

                self.path.pop();
                table.set_formula_state(pos, EvalStatus::Evaluated, value);
                trace!(%pos, value, "formula evaluated");
                Ok(value)
            }
        }
    }

    /// Evaluate the expression `id` belonging to the formula at `origin`.
    ///
    /// `Plus` evaluates its left operand first. IEEE semantics apply, so
    /// `NaN` and infinities propagate.
    fn evaluate_expr(
        &mut self,
        table: &mut Table<'_>,
        origin: CellPos,
        id: ExprId,
    ) -> Result<f64, EvalError> {
        ensure_sufficient_stack(|| {
            self.stats.nodes_visited += 1;
            match *self.arena.get(id) {
                Expr::Number(value) => Ok(value),
                Expr::CellRef { row, col } => self.resolve(table, Some(origin), CellPos::new(row, col)),
                Expr::Plus { lhs, rhs } => {
                    let lhs = self.evaluate_expr(table, origin, lhs)?;
                    let rhs = self.evaluate_expr(table, origin, rhs)?;
                    Ok(lhs + rhs)
                }
            }
        })
    }
}

#[cfg(test)]
mod tests;
