//! Tracing subscriber installation for the CLI.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Filter directives, e.g. `MINICEL_LOG=minicel_eval=trace`.
const LOG_ENV: &str = "MINICEL_LOG";
/// Set to anything to get indented, per-span output.
const LOG_TREE_ENV: &str = "MINICEL_LOG_TREE";

/// Initialize tracing for debug output on stderr.
///
/// Reads `MINICEL_LOG`, falling back to `RUST_LOG`. Nothing is installed
/// when neither is set. Safe to call multiple times.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Ok(directives) = std::env::var(LOG_ENV).or_else(|_| std::env::var("RUST_LOG")) else {
            return;
        };
        let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));
        let registry = tracing_subscriber::registry().with(filter);

        if std::env::var_os(LOG_TREE_ENV).is_some() {
            let _ = registry
                .with(HierarchicalLayer::new(2).with_targets(true))
                .try_init();
        } else {
            let _ = registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init();
        }
    });
}
