//! `run` - evaluate a table file and render it.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::read_file;
use crate::{evaluate_source_with_stats, render_grid, Error, RenderOptions};

/// Options for the `run` command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub render: RenderOptions,
}

/// Parse `run` arguments: one input path plus `--precision=N`.
pub fn parse_run_options(args: &[String]) -> Result<(PathBuf, RunOptions), String> {
    let mut options = RunOptions::default();
    let mut path = None;

    for arg in args {
        if let Some(value) = arg.strip_prefix("--precision=") {
            options.render.precision = value
                .parse()
                .map_err(|_| format!("invalid precision '{value}'"))?;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    let path = path.ok_or_else(|| "input file is not provided".to_owned())?;
    Ok((path, options))
}

/// Evaluate the table at `path` and render it.
pub fn run_file(path: &Path, options: &RunOptions) -> Result<String, Error> {
    let source = read_file(path)?;
    let (grid, stats) = evaluate_source_with_stats(&source)?;
    debug!(
        path = %path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        formulas = stats.formulas_evaluated,
        cache_hits = stats.cache_hits,
        "run finished"
    );
    Ok(render_grid(&grid, options.render))
}
