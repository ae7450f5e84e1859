//! Grid rendering.

use std::fmt::Write;

use minicel_eval::{Grid, Value};

/// Output formatting options.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Digits after the decimal point for numbers.
    pub precision: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { precision: 6 }
    }
}

/// Render `grid` with `|` between cells and `\n` after every row.
///
/// Numbers are fixed-point with `options.precision` fractional digits; text
/// is written verbatim and empty cells as nothing.
pub fn render_grid(grid: &Grid<'_>, options: RenderOptions) -> String {
    let mut out = String::new();
    for row in grid.iter_rows() {
        for (col, value) in row.iter().enumerate() {
            if col > 0 {
                out.push('|');
            }
            match *value {
                Value::Empty => {}
                Value::Text(text) => out.push_str(text),
                Value::Number(number) => {
                    let _ = write!(out, "{number:.prec$}", prec = options.precision);
                }
            }
        }
        out.push('\n');
    }
    out
}
