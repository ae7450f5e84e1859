//! minicel IR - shared data structures for the formula engine.
//!
//! - [`Span`] for byte ranges into source text
//! - [`CellPos`] for table coordinates
//! - [`Expr`] nodes stored flat in an [`ExprArena`], addressed by [`ExprId`]
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Expr>`, children are `ExprId(u32)` indices
//! - **One arena per table**: every formula in a file shares a single store
//! - **Copy everywhere**: all node types are `Copy`, so the evaluator can read a
//!   node and drop the borrow before recursing

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod cell_pos;
#[cfg(feature = "dump")]
mod dump;
mod expr;
mod expr_id;
mod span;

pub use arena::ExprArena;
pub use cell_pos::CellPos;
#[cfg(feature = "dump")]
pub use dump::DumpError;
pub use expr::Expr;
pub use expr_id::ExprId;
pub use span::Span;
