//! Evaluated output grid.

use minicel_ir::CellPos;

/// The resolved value of one cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value<'src> {
    Empty,
    Text(&'src str),
    /// A literal number or a formula's result.
    Number(f64),
}

/// A `rows × cols` grid of values, row-major, borrowing text from the source.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<'src> {
    rows: usize,
    cols: usize,
    values: Vec<Value<'src>>,
}

impl<'src> Grid<'src> {
    pub(crate) fn new(rows: usize, cols: usize, values: Vec<Value<'src>>) -> Self {
        debug_assert_eq!(values.len(), rows * cols);
        Grid { rows, cols, values }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, pos: CellPos) -> Option<Value<'src>> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(self.values[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    /// Numeric value at `pos`, if that cell holds a number.
    pub fn number(&self, pos: CellPos) -> Option<f64> {
        match self.get(pos)? {
            Value::Number(value) => Some(value),
            Value::Empty | Value::Text(_) => None,
        }
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Value<'src>]> {
        self.values.chunks(self.cols.max(1))
    }
}
