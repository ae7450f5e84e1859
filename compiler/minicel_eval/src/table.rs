//! The cell grid and input classification.

use minicel_ir::{CellPos, ExprArena, ExprId, Span};
use minicel_parse::parse_formula;
use tracing::{debug, trace};

use crate::{Grid, TableError, Value};

/// Row separator.
const ROW_SEPARATOR: char = '\n';
/// Column separator.
const COLUMN_SEPARATOR: char = '|';
/// Leading marker of a formula cell.
const FORMULA_MARKER: char = '=';

/// Evaluation state of a formula cell.
///
/// White/gray/black marking for the depth-first walk over references:
/// re-entering an `InProgress` cell is a cycle, and an `Evaluated` cell
/// returns its cached value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalStatus {
    #[default]
    Unevaluated,
    InProgress,
    Evaluated,
}

/// A formula cell: its AST root plus evaluation state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FormulaCell {
    pub expr: ExprId,
    pub status: EvalStatus,
    /// Meaningful only once `status` is [`EvalStatus::Evaluated`].
    pub value: f64,
}

impl FormulaCell {
    pub fn new(expr: ExprId) -> Self {
        FormulaCell {
            expr,
            status: EvalStatus::Unevaluated,
            value: 0.0,
        }
    }
}

/// One grid position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Cell {
    /// Past the end of a row shorter than the widest one.
    Empty,
    /// Trimmed text, as a byte range into the source.
    Text(Span),
    Number(f64),
    Formula(FormulaCell),
}

/// A fixed `rows × cols` grid of cells, stored row-major.
///
/// Dimensions are fixed at construction. Only the evaluator mutates cells,
/// and only their formula status and value.
#[derive(Clone, Debug)]
pub struct Table<'src> {
    source: &'src str,
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl<'src> Table<'src> {
    /// Split `source` into cells and parse every formula into `arena`.
    ///
    /// Rows are separated by `\n` (a final newline does not start a new row)
    /// and cells by `|`. Each cell is trimmed, then classified: a leading `=`
    /// makes it a formula, text that parses in full as `f64` is a number, and
    /// anything else is text. Rows shorter than the widest are padded with
    /// [`Cell::Empty`].
    pub fn parse(source: &'src str, arena: &mut ExprArena) -> Result<Self, TableError> {
        let (rows, cols) = estimate_dimensions(source);
        let mut table = Table {
            source,
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        };

        for (row, (line_start, line)) in with_offsets(source.split_terminator(ROW_SEPARATOR)).enumerate() {
            for (col, (cell_start, raw)) in with_offsets(line.split(COLUMN_SEPARATOR)).enumerate() {
                let pos = CellPos::new(row, col);
                let cell = classify(raw, line_start + cell_start, pos, arena)?;
                trace!(%pos, ?cell, "classified");
                let index = table.index(pos);
                table.cells[index] = cell;
            }
        }

        debug!(rows, cols, formulas = table.formula_count(), nodes = arena.len(), "table parsed");
        Ok(table)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at `pos`, or `None` if it lies outside the table.
    #[inline]
    pub fn get(&self, pos: CellPos) -> Option<&Cell> {
        self.contains(pos).then(|| &self.cells[self.index(pos)])
    }

    #[inline]
    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Resolve a text span against the source.
    #[inline]
    pub fn text(&self, span: Span) -> &'src str {
        span.slice(self.source)
    }

    /// All coordinates, row-major.
    pub fn positions(&self) -> impl Iterator<Item = CellPos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| CellPos::new(row, col)))
    }

    /// Number of formula cells.
    pub fn formula_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, Cell::Formula(_)))
            .count()
    }

    /// Update the evaluation state of the formula at `pos`.
    ///
    /// No-op for non-formula cells.
    pub(crate) fn set_formula_state(&mut self, pos: CellPos, status: EvalStatus, value: f64) {
        let index = self.index(pos);
        if let Some(Cell::Formula(formula)) = self.cells.get_mut(index) {
            formula.status = status;
            formula.value = value;
        }
    }

    /// Snapshot the table as output values.
    ///
    /// Formula cells that have not been evaluated yet show as
    /// [`Value::Empty`].
    pub fn to_grid(&self) -> Grid<'src> {
        let values = self
            .cells
            .iter()
            .map(|cell| match *cell {
                Cell::Empty => Value::Empty,
                Cell::Text(span) => Value::Text(self.text(span)),
                Cell::Number(value) => Value::Number(value),
                Cell::Formula(FormulaCell {
                    status: EvalStatus::Evaluated,
                    value,
                    ..
                }) => Value::Number(value),
                Cell::Formula(_) => Value::Empty,
            })
            .collect();
        Grid::new(self.rows, self.cols, values)
    }

    #[inline]
    fn index(&self, pos: CellPos) -> usize {
        pos.row * self.cols + pos.col
    }
}

/// Pre-scan: row count and the widest row's column count.
fn estimate_dimensions(source: &str) -> (usize, usize) {
    source
        .split_terminator(ROW_SEPARATOR)
        .fold((0, 0), |(rows, cols), line| {
            (rows + 1, cols.max(line.split(COLUMN_SEPARATOR).count()))
        })
}

/// Pair each piece of a single-byte-separated split with its byte offset.
fn with_offsets<'s>(pieces: impl Iterator<Item = &'s str>) -> impl Iterator<Item = (usize, &'s str)> {
    pieces.scan(0, |offset, piece| {
        let start = *offset;
        *offset += piece.len() + 1;
        Some((start, piece))
    })
}

fn classify(raw: &str, start: usize, pos: CellPos, arena: &mut ExprArena) -> Result<Cell, TableError> {
    let trimmed = raw.trim();
    let start = start + (raw.len() - raw.trim_start().len());

    if let Some(formula) = trimmed.strip_prefix(FORMULA_MARKER) {
        return parse_formula(formula, arena)
            .map(|expr| Cell::Formula(FormulaCell::new(expr)))
            .map_err(|source| TableError { cell: pos, source });
    }
    if let Ok(value) = trimmed.parse::<f64>() {
        return Ok(Cell::Number(value));
    }
    Ok(Cell::Text(Span::from_range(start..start + trimmed.len())))
}
