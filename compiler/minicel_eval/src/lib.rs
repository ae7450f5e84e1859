//! Table construction and formula evaluation for minicel.
//!
//! [`Table::parse`] splits the input into a fixed grid of [`Cell`]s, routing
//! every formula through the parser into one shared arena. An [`Evaluator`]
//! then walks the table row-major, resolving references on demand; each
//! formula cell's [`EvalStatus`] doubles as the memoization cache and the
//! cycle detector. The result is a [`Grid`] of [`Value`]s.

mod errors;
mod evaluator;
mod grid;
mod table;

pub use errors::{EvalError, TableError};
pub use evaluator::{EvalStats, Evaluator};
pub use grid::{Grid, Value};
pub use table::{Cell, EvalStatus, FormulaCell, Table};
