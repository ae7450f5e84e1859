//! minicel - evaluate pipe-separated tables with formulas.
//!
//! # Pipeline
//!
//! ```text
//! source text
//!     │  Table::parse        (split rows on `\n`, cells on `|`, classify)
//!     │      └─ parse_formula ──► ExprArena   (one arena for every formula)
//!     ▼
//! Table ──► Evaluator::evaluate_table ──► Grid ──► render_grid ──► stdout
//! ```
//!
//! Every error is fatal: the first lex, parse or evaluation failure aborts
//! the run and no grid is produced.

pub mod commands;
mod error;
mod render;
mod tracing_setup;

pub use error::Error;
pub use minicel_eval::{EvalStats, Grid, Value};
pub use render::{render_grid, RenderOptions};
pub use tracing_setup::init_tracing;

use minicel_eval::{Evaluator, Table};
use minicel_ir::ExprArena;

/// Parse and evaluate a whole table.
pub fn evaluate_source(source: &str) -> Result<Grid<'_>, Error> {
    evaluate_source_with_stats(source).map(|(grid, _)| grid)
}

/// Like [`evaluate_source`], also returning the evaluator's counters.
pub fn evaluate_source_with_stats(source: &str) -> Result<(Grid<'_>, EvalStats), Error> {
    let mut arena = ExprArena::new();
    let mut table = Table::parse(source, &mut arena)?;
    let mut evaluator = Evaluator::new(&arena);
    let grid = evaluator.evaluate_table(&mut table)?;
    Ok((grid, evaluator.stats()))
}
